use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::Fs;
use crate::ArcPath;

#[tokio::test]
async fn test_fs_write_then_read() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = ArcPath::from(temp_dir.path().join("config.toml"));
    let fs = Fs::spawn();

    let mut file = fs.write_file(path.clone()).await.unwrap();
    file.write_all(b"first version, longer").await.unwrap();
    file.flush().await.unwrap();
    drop(file);

    // Writing again must truncate the previous content
    let mut file = fs.write_file(path.clone()).await.unwrap();
    file.write_all(b"second").await.unwrap();
    file.flush().await.unwrap();
    drop(file);

    let mut contents = String::new();
    fs.read_file(path.clone())
        .await
        .unwrap()
        .read_to_string(&mut contents)
        .await
        .unwrap();
    assert_eq!(contents, "second");

    fs.remove_file(path.clone()).await.unwrap();
    assert!(fs.read_file(path).await.is_err());
}

#[tokio::test]
async fn test_fs_append() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = ArcPath::from(temp_dir.path().join("latest.log"));
    let fs = Fs::spawn();

    for line in ["one\n", "two\n"] {
        let mut file = fs.append_file(path.clone()).await.unwrap();
        file.write_all(line.as_bytes()).await.unwrap();
        file.flush().await.unwrap();
    }

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(contents, "one\ntwo\n");
}

#[tokio::test]
async fn test_fs_mkdir_and_read_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = ArcPath::from(temp_dir.path().join("a").join("b"));
    let fs = Fs::spawn();

    fs.mkdir(dir.clone()).await.unwrap();
    assert!(fs.read_dir(dir.clone()).await.unwrap().is_empty());

    let file = ArcPath::from(dir.join("x.log"));
    drop(fs.write_file(file).await.unwrap());
    let entries = fs.read_dir(dir).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries.front().unwrap().ends_with("x.log"));
}

#[tokio::test]
async fn test_mock_fs_reroots_absolute_paths() {
    let fs = Fs::mock();
    let dir = ArcPath::from(std::path::Path::new("/tmp/movie-info/logs"));
    fs.mkdir(dir.clone()).await.unwrap();

    let path = ArcPath::from(dir.join("latest.log"));
    let mut file = fs.write_file(path.clone()).await.unwrap();
    file.write_all(b"hello").await.unwrap();
    file.flush().await.unwrap();
    drop(file);

    let mut contents = String::new();
    fs.read_file(path)
        .await
        .unwrap()
        .read_to_string(&mut contents)
        .await
        .unwrap();
    assert_eq!(contents, "hello");

    let entries = fs.read_dir(dir).await.unwrap();
    assert_eq!(entries.len(), 1);
    let entry = entries.front().unwrap().clone();
    assert_eq!(entry.as_ref(), std::path::Path::new("/tmp/movie-info/logs/latest.log"));

    // Virtual paths round-trip through the mock
    fs.remove_file(entry).await.unwrap();
}
