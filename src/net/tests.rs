use std::collections::HashMap;

use super::*;
use crate::app::config::{Data, USizeOpt};

#[tokio::test]
async fn test_mock_answers_known_urls() {
    let url = ArcStr::from("https://www.omdbapi.com/?i=tt0111161");
    let net = Net::mock(HashMap::from([(url.clone(), ArcStr::from("{}"))]));

    assert_eq!(&*net.get(url.clone()).await.unwrap(), "{}");
    assert!(net.get(ArcStr::from("https://elsewhere/")).await.is_err());

    let requests = net.requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], url);
}

#[tokio::test]
async fn test_actual_net_reports_transport_failure() {
    let config = Config::mock(Data::default());
    config.set_usize(USizeOpt::Timeout, 2).await;

    let net = Net::spawn(config, Log::mock()).await.unwrap();
    assert!(net.requests().await.is_none());

    // Port 9 on localhost is the discard service and is never bound in CI
    let result = net.get(ArcStr::from("http://127.0.0.1:9/")).await;
    assert!(result.is_err());
}
