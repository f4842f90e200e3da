use std::env::VarError;

use super::Env;
use crate::{ArcStr, arc_os_str};

#[tokio::test]
async fn test_env_reads_process_environment() {
    let env = Env::spawn();
    // PATH is set in every environment the test suite runs in
    let expected = std::env::var("PATH").unwrap();
    let value = env.env(arc_os_str("PATH")).await.unwrap();
    assert_eq!(value.as_ref(), expected);
}

#[tokio::test]
async fn test_env_missing_variable() {
    let env = Env::spawn();
    let result = env
        .env(arc_os_str("MOVIE_INFO_SURELY_NOT_SET_VARIABLE"))
        .await;
    assert!(matches!(result, Err(VarError::NotPresent)));
}

#[tokio::test]
async fn test_mock_env() {
    let env = Env::mock_with([(arc_os_str("OMDB_API_KEY"), ArcStr::from("abc123"))]);
    assert_eq!(
        env.env(arc_os_str("OMDB_API_KEY")).await.unwrap().as_ref(),
        "abc123"
    );
    assert!(matches!(
        env.env(arc_os_str("HOME")).await,
        Err(VarError::NotPresent)
    ));

    let empty = Env::mock();
    assert!(empty.env(arc_os_str("OMDB_API_KEY")).await.is_err());
}
