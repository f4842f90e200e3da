use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::api::omdb::{ItemDetail, SearchResultItem};

fn item(n: usize) -> SearchResultItem {
    SearchResultItem {
        id: ArcStr::from(format!("tt{:07}", n)),
        title: ArcStr::from(format!("Movie {}", n)),
        year: ArcStr::from("2023"),
        kind: ArcStr::from("movie"),
        poster_url: None,
    }
}

fn state_with(count: usize, total: usize) -> BrowseState {
    BrowseState {
        results: (0..count).map(item).collect(),
        total_available: total,
        ..BrowseState::default()
    }
}

fn detail() -> ItemDetail {
    ItemDetail {
        id: ArcStr::from("tt0111161"),
        title: ArcStr::from("The Shawshank Redemption"),
        year: ArcStr::from("1994"),
        kind: ArcStr::from("movie"),
        poster_url: None,
        plot: Some(ArcStr::from("Two imprisoned men bond over a number of years.")),
        director: Some(ArcStr::from("Frank Darabont")),
        cast: vec![ArcStr::from("Tim Robbins"), ArcStr::from("Morgan Freeman")],
        genres: vec![ArcStr::from("Drama")],
        runtime: Some(ArcStr::from("142 min")),
        rating: Some(ArcStr::from("9.3")),
    }
}

fn type_text(ui: &mut UiState, state: &BrowseState, text: &str) {
    for c in text.chars() {
        assert_eq!(ui.handle_event(UiEvent::Char(c), state), None);
    }
}

fn rendered(browse: BrowseState, ui: UiState, has_more: bool, loading_page: Option<usize>) -> String {
    let screen = Screen {
        browse,
        ui,
        has_more,
        loading_page,
    };
    let mut terminal = Terminal::new(TestBackend::new(84, 30)).unwrap();
    terminal.draw(|frame| draw(frame, &screen)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_typing_and_submitting_a_query() {
    let state = BrowseState::default();
    let mut ui = UiState::default();

    assert_eq!(ui.handle_event(UiEvent::Char('/'), &state), None);
    assert_eq!(ui.mode, InputMode::Editing);
    type_text(&mut ui, &state, "batmam");
    ui.handle_event(UiEvent::Backspace, &state);
    type_text(&mut ui, &state, "n");

    assert_eq!(
        ui.handle_event(UiEvent::Enter, &state),
        Some(Intent::Search(ArcStr::from("batman")))
    );
    assert_eq!(ui.mode, InputMode::Browsing);
}

#[test]
fn test_keys_are_text_while_editing() {
    let state = state_with(3, 3);
    let mut ui = UiState::default();
    ui.handle_event(UiEvent::Char('s'), &state);
    type_text(&mut ui, &state, "mqg");
    assert_eq!(ui.input, "mqg");
}

#[test]
fn test_escape_cancels_editing() {
    let state = BrowseState {
        active_query: ArcStr::from("alien"),
        ..state_with(2, 2)
    };
    let mut ui = UiState::default();
    ui.handle_event(UiEvent::Char('/'), &state);
    assert_eq!(ui.input, "alien");
    type_text(&mut ui, &state, "s");
    assert_eq!(ui.handle_event(UiEvent::Esc, &state), None);
    assert_eq!(ui.mode, InputMode::Browsing);
    assert_eq!(ui.input, "alien");
}

#[test]
fn test_browsing_keys() {
    let state = state_with(10, 50);
    let mut ui = UiState::default();
    ui.handle_event(UiEvent::Resize(84, 30), &state);
    assert_eq!(ui.columns, 3);

    assert_eq!(ui.handle_event(UiEvent::Char('m'), &state), Some(Intent::LoadMore));
    assert_eq!(ui.handle_event(UiEvent::Quit, &state), Some(Intent::Quit));
    assert_eq!(ui.handle_event(UiEvent::Char('q'), &state), Some(Intent::Quit));

    ui.handle_event(UiEvent::Down, &state);
    ui.handle_event(UiEvent::Char('l'), &state);
    assert_eq!(ui.cursor, 4);
    assert_eq!(
        ui.handle_event(UiEvent::Enter, &state),
        Some(Intent::Select(ArcStr::from("tt0000004")))
    );

    // Moving past the last card stays put
    ui.cursor = 9;
    ui.handle_event(UiEvent::Right, &state);
    ui.handle_event(UiEvent::Down, &state);
    assert_eq!(ui.cursor, 9);

    assert_eq!(ui.handle_event(UiEvent::Home, &state), Some(Intent::Home));
    assert_eq!(ui.cursor, 0);
}

#[test]
fn test_enter_without_results_does_nothing() {
    let state = BrowseState::default();
    let mut ui = UiState::default();
    assert_eq!(ui.handle_event(UiEvent::Enter, &state), None);
}

#[test]
fn test_escape_closes_detail() {
    let state = BrowseState {
        selected_detail: Some(detail()),
        ..state_with(1, 1)
    };
    let mut ui = UiState::default();
    ui.handle_event(UiEvent::Down, &state);
    assert_eq!(ui.detail_scroll, 1);
    // Navigation keys scroll the popup instead of opening anything
    assert_eq!(ui.handle_event(UiEvent::Char('m'), &state), None);
    assert_eq!(ui.handle_event(UiEvent::Esc, &state), Some(Intent::CloseDetail));
}

#[test]
fn test_sync_clamps_cursor() {
    let mut ui = UiState {
        cursor: 7,
        detail_scroll: 4,
        ..UiState::default()
    };
    let state = BrowseState {
        active_query: ArcStr::from("dune"),
        ..state_with(3, 3)
    };
    ui.sync(&state);
    assert_eq!(ui.cursor, 2);
    assert_eq!(ui.detail_scroll, 0);
    assert_eq!(ui.input, "dune");
}

#[test]
fn test_render_latest_movies() {
    let out = rendered(state_with(4, 40), UiState::default(), true, None);
    assert!(out.contains("Movie Info"));
    assert!(out.contains("Latest Movies"));
    assert!(out.contains("Movie 3"));
    assert!(out.contains("[movie]"));
    assert!(out.contains("Showing 4 of 40"));
    assert!(out.contains("Load More"));
    assert!(!out.contains("Oops!"));
}

#[test]
fn test_render_search_error() {
    let browse = BrowseState {
        active_query: ArcStr::from("zzzznotamovie"),
        error_message: Some(ArcStr::from("No movies found")),
        ..BrowseState::default()
    };
    let ui = UiState {
        input: "zzzznotamovie".to_string(),
        ..UiState::default()
    };
    let out = rendered(browse, ui, false, None);
    assert!(out.contains("Search Results"));
    assert!(out.contains("zzzznotamovie"));
    assert!(out.contains("Oops!"));
    assert!(out.contains("No movies found"));
    assert!(!out.contains("Load More"));
}

#[test]
fn test_render_loading_states() {
    let first = rendered(BrowseState::default(), UiState::default(), false, Some(1));
    assert!(first.contains("Loading..."));

    let more = rendered(state_with(10, 50), UiState::default(), true, Some(2));
    assert!(more.contains("Loading..."));
    assert!(!more.contains("Load More"));
}

#[test]
fn test_render_detail_popup() {
    let browse = BrowseState {
        selected_detail: Some(detail()),
        ..state_with(2, 2)
    };
    let out = rendered(browse, UiState::default(), false, None);
    assert!(out.contains("The Shawshank Redemption"));
    assert!(out.contains("IMDb 9.3"));
    assert!(out.contains("Frank Darabont"));
    assert!(out.contains("Tim Robbins, Morgan Freeman"));
    assert!(out.contains("Drama"));
    assert!(out.contains("No poster available"));
}
