use super::*;

#[tokio::test]
async fn test_mock_records_messages_in_order() {
    let log = Log::mock();
    log.info("app", "first");
    log.warn("api.omdb", "second");
    log.error("net", format!("third {}", 3));

    let messages = log.messages().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].level, LogLevel::Info);
    assert_eq!(messages[0].scope, "app");
    assert_eq!(messages[1].level, LogLevel::Warning);
    assert_eq!(messages[2].message, "third 3");
}

#[tokio::test]
async fn test_on_error_helpers_pass_results_through() {
    let log = Log::mock();

    let ok: Result<u8, &str> = log.warn_on_error("app", Ok(1));
    assert_eq!(ok, Ok(1));
    assert!(log.messages().unwrap().is_empty());

    let err: Result<u8, &str> = log.error_on_error("app", Err("boom"));
    assert_eq!(err, Err("boom"));

    let messages = log.messages().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].level, LogLevel::Error);
    assert_eq!(messages[0].message, "boom");
}

#[tokio::test]
async fn test_actual_log_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = ArcPath::from(dir.path().join("logs"));

    let log = Log::spawn(Fs::spawn(), LogLevel::Error, 0, log_dir.clone())
        .await
        .unwrap();
    assert!(log.messages().is_none());

    log.info("app", "hello from the test");
    log.collect_garbage().await;
    log.flush().await;

    let latest = std::fs::read_to_string(log_dir.join("latest.log")).unwrap();
    assert!(latest.contains("[INFO] [app] hello from the test"));

    let timestamped: Vec<_> = std::fs::read_dir(&*log_dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("movie-info_"))
        .collect();
    assert_eq!(timestamped.len(), 1);
    let content = std::fs::read_to_string(timestamped[0].path()).unwrap();
    assert!(content.contains("hello from the test"));
}

#[tokio::test]
async fn test_garbage_collection_keeps_fresh_logs() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = ArcPath::from(dir.path());
    std::fs::write(dir.path().join("movie-info_old.log"), "old").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "unrelated").unwrap();

    let log = Log::spawn(Fs::spawn(), LogLevel::Info, 1, log_dir)
        .await
        .unwrap();
    log.collect_garbage().await;
    log.flush().await;

    // Both files were just modified, so neither is older than a day
    assert!(dir.path().join("movie-info_old.log").exists());
    assert!(dir.path().join("notes.txt").exists());
}

#[tokio::test]
async fn test_core_builds_on_mock_fs() {
    let fs = Fs::mock();
    let log_dir = ArcPath::from(std::path::Path::new("/tmp/movie-info/logs"));
    let core = LogCore::build(fs.clone(), LogLevel::Info, 0, log_dir.clone())
        .await
        .unwrap();
    let (log, handle) = core.spawn();
    log.warn("app", "buffered");
    log.flush().await;
    handle.await.unwrap();

    let entries = fs.read_dir(log_dir).await.unwrap();
    assert_eq!(entries.len(), 2);
}
