use std::time::Duration;

use tokio::sync::mpsc;

use super::core::{detail_report, list_report, resolve_api_key};
use super::*;
use crate::api::omdb::{ItemDetail, ListRequest, Outcome, ResultPage, SearchResultItem};
use crate::app::browse::{BrowseState, FETCH_FAILED, NO_MOVIES_FOUND};
use crate::app::config::{Config, Data};
use crate::app::ui::Screen;
use crate::env::Env;
use crate::{ArcStr, arc_os_str};

fn item(n: usize) -> SearchResultItem {
    SearchResultItem {
        id: ArcStr::from(format!("tt{:07}", n)),
        title: ArcStr::from(format!("Movie {}", n)),
        year: ArcStr::from("2023"),
        kind: ArcStr::from("movie"),
        poster_url: None,
    }
}

fn found(range: std::ops::Range<usize>, total: usize) -> Result<Outcome<ResultPage>, ArcStr> {
    Ok(Outcome::Found(ResultPage {
        items: range.map(item).collect(),
        total,
    }))
}

fn shawshank() -> ItemDetail {
    ItemDetail {
        id: ArcStr::from("tt0111161"),
        title: ArcStr::from("The Shawshank Redemption"),
        year: ArcStr::from("1994"),
        kind: ArcStr::from("movie"),
        poster_url: None,
        plot: Some(ArcStr::from("Two imprisoned men bond.")),
        director: Some(ArcStr::from("Frank Darabont")),
        cast: vec![ArcStr::from("Tim Robbins"), ArcStr::from("Morgan Freeman")],
        genres: vec![ArcStr::from("Drama")],
        runtime: Some(ArcStr::from("142 min")),
        rating: Some(ArcStr::from("9.3")),
    }
}

fn app(omdb: &OmdbApi, log: &Log) -> App {
    App::with_actors(omdb.clone(), log.clone(), FeedDefaults::default())
}

/// Polls the mock terminal until the last drawn screen satisfies `done`.
async fn wait_for(terminal: &Terminal, done: impl Fn(&Screen) -> bool) -> Screen {
    for _ in 0..200 {
        if let Some(screen) = terminal.screens().await.unwrap().last() {
            if done(screen) {
                return screen.clone();
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Timed out waiting for the expected screen");
}

#[tokio::test]
async fn test_latest_command_report() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    omdb.mock_list(FeedDefaults::default().request(1), found(1..3, 40))
        .await;

    let mut app = app(&omdb, &log);
    let report = app.report(Command::Latest { page: 1 }).await.unwrap();

    assert_eq!(
        report,
        "1. Movie 1 (2023) [movie] tt0000001\n\
         2. Movie 2 (2023) [movie] tt0000002\n\
         Showing 2 of 40\n"
    );
    assert_eq!(
        omdb.mock_requests().await.unwrap(),
        vec![ArcStr::from("list:2023:1")]
    );
}

#[tokio::test]
async fn test_search_command_not_found() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    omdb.mock_list(
        ListRequest::search("zzzznotamovie", 1),
        Ok(Outcome::NotFound(ArcStr::from("Movie not found!"))),
    )
    .await;

    let mut app = app(&omdb, &log);
    let report = app
        .report(Command::Search {
            query: ArcStr::from("zzzznotamovie"),
            page: 1,
        })
        .await
        .unwrap();

    assert_eq!(report, format!("{}\n", NO_MOVIES_FOUND));
}

#[tokio::test]
async fn test_search_command_failure_is_logged() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    omdb.mock_list(ListRequest::search("batman", 2), Err(ArcStr::from("timed out")))
        .await;

    let mut app = app(&omdb, &log);
    let report = app
        .report(Command::Search {
            query: ArcStr::from("batman"),
            page: 2,
        })
        .await
        .unwrap();

    assert_eq!(report, format!("{}\n", FETCH_FAILED));
    let messages = log.messages().unwrap();
    assert!(messages.iter().any(|m| m.message.contains("timed out")));
}

#[tokio::test]
async fn test_blank_search_command_is_rejected() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    let mut app = app(&omdb, &log);

    let result = app
        .report(Command::Search {
            query: ArcStr::from("   "),
            page: 1,
        })
        .await;

    assert!(result.is_err());
    assert!(omdb.mock_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_detail_command() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    omdb.mock_detail(ArcStr::from("tt0111161"), Ok(Outcome::Found(shawshank())))
        .await;

    let mut app = app(&omdb, &log);
    let report = app
        .report(Command::Detail {
            id: ArcStr::from("tt0111161"),
        })
        .await
        .unwrap();

    assert!(report.starts_with("The Shawshank Redemption (1994) [movie] tt0111161\n"));
    assert!(report.contains("IMDb 9.3\n"));
    assert!(report.contains("Cast: Tim Robbins, Morgan Freeman\n"));
    assert!(report.contains("No poster available\n"));
}

#[tokio::test]
async fn test_detail_command_failures_are_errors() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    omdb.mock_detail(
        ArcStr::from("tt0000000"),
        Ok(Outcome::NotFound(ArcStr::from("Incorrect IMDb ID."))),
    )
    .await;

    let mut app = app(&omdb, &log);
    let not_found = app
        .report(Command::Detail {
            id: ArcStr::from("tt0000000"),
        })
        .await
        .unwrap_err();
    assert!(not_found.to_string().contains("Incorrect IMDb ID."));

    let unreachable = app
        .report(Command::Detail {
            id: ArcStr::from("tt9999999"),
        })
        .await;
    assert!(unreachable.is_err());
}

#[test]
fn test_reports_of_empty_states() {
    assert_eq!(list_report(&BrowseState::default()), "");

    let mut detail = shawshank();
    detail.poster_url = Some(ArcStr::from("https://example.com/p.jpg"));
    detail.plot = None;
    let report = detail_report(&detail);
    assert!(report.contains("Poster: https://example.com/p.jpg\n"));
    assert!(!report.contains("No poster available"));
}

#[tokio::test]
async fn test_api_key_precedence() {
    let config = Config::mock(Data {
        api_key: "from-config".to_string(),
        ..Default::default()
    });
    let env = Env::mock_with([(arc_os_str("OMDB_API_KEY"), ArcStr::from("from-env"))]);
    let no_env = Env::mock();

    let key = resolve_api_key(Some("from-flag".to_string()), &env, &config).await;
    assert_eq!(key.as_ref(), "from-flag");

    let key = resolve_api_key(None, &env, &config).await;
    assert_eq!(key.as_ref(), "from-env");

    let key = resolve_api_key(Some(String::new()), &no_env, &config).await;
    assert_eq!(key.as_ref(), "from-config");
}

#[tokio::test]
async fn test_interactive_search_flow() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    let terminal = Terminal::mock();
    omdb.mock_list(FeedDefaults::default().request(1), found(1..3, 2))
        .await;
    omdb.mock_list(ListRequest::search("bat", 1), found(10..20, 50))
        .await;
    omdb.mock_list(ListRequest::search("bat", 2), found(20..30, 50))
        .await;

    let (events_tx, events_rx) = mpsc::channel(16);
    let (_app, handle) = app(&omdb, &log)
        .spawn_on(terminal.clone(), events_rx)
        .unwrap();

    let screen = wait_for(&terminal, |s| s.browse.results.len() == 2).await;
    assert!(!screen.browse.is_search());
    assert!(!screen.has_more);

    for event in [
        UiEvent::Char('/'),
        UiEvent::Char('b'),
        UiEvent::Char('a'),
        UiEvent::Char('t'),
        UiEvent::Enter,
    ] {
        events_tx.send(event).await.unwrap();
    }
    let screen = wait_for(&terminal, |s| s.browse.results.len() == 10).await;
    assert_eq!(screen.browse.active_query.as_ref(), "bat");
    assert!(screen.has_more);

    events_tx.send(UiEvent::Char('m')).await.unwrap();
    let screen = wait_for(&terminal, |s| s.browse.results.len() == 20).await;
    assert_eq!(screen.browse.current_page, 2);

    events_tx.send(UiEvent::Char('q')).await.unwrap();
    handle.await.unwrap();

    assert_eq!(terminal.is_taken_over().await, Some(false));
    assert_eq!(
        omdb.mock_requests().await.unwrap(),
        vec![
            ArcStr::from("list:2023:1"),
            ArcStr::from("list:bat:1"),
            ArcStr::from("list:bat:2"),
        ]
    );
}

#[tokio::test]
async fn test_interactive_detail_and_shutdown() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    let terminal = Terminal::mock();
    omdb.mock_list(FeedDefaults::default().request(1), found(1..2, 1))
        .await;
    omdb.mock_detail(ArcStr::from("tt0000001"), Ok(Outcome::Found(shawshank())))
        .await;

    let (events_tx, events_rx) = mpsc::channel(16);
    let (app, handle) = app(&omdb, &log)
        .spawn_on(terminal.clone(), events_rx)
        .unwrap();

    wait_for(&terminal, |s| s.browse.results.len() == 1).await;
    events_tx.send(UiEvent::Enter).await.unwrap();
    let screen = wait_for(&terminal, |s| s.browse.selected_detail.is_some()).await;
    assert_eq!(
        screen.browse.selected_detail.unwrap().title.as_ref(),
        "The Shawshank Redemption"
    );

    events_tx.send(UiEvent::Esc).await.unwrap();
    wait_for(&terminal, |s| s.browse.selected_detail.is_none()).await;

    app.shutdown().await.unwrap();
    handle.await.unwrap();
    assert_eq!(terminal.is_taken_over().await, Some(false));
}

#[tokio::test]
async fn test_spawned_app_cannot_resolve() {
    let omdb = OmdbApi::mock();
    let log = Log::mock();
    let terminal = Terminal::mock();
    let (events_tx, events_rx) = mpsc::channel(16);
    let (mut app, handle) = app(&omdb, &log)
        .spawn_on(terminal, events_rx)
        .unwrap();

    assert!(app.report(Command::Latest { page: 1 }).await.is_err());

    drop(events_tx);
    handle.await.unwrap();
}
