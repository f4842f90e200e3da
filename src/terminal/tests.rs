use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::data::map_event;
use super::*;
use crate::app::{browse::BrowseState, ui::UiState};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn screen() -> Screen {
    Screen {
        browse: BrowseState::default(),
        ui: UiState::default(),
        has_more: false,
        loading_page: None,
    }
}

#[test]
fn test_map_keys() {
    assert_eq!(map_event(key(KeyCode::Char('m'))), Some(UiEvent::Char('m')));
    assert_eq!(map_event(key(KeyCode::Enter)), Some(UiEvent::Enter));
    assert_eq!(map_event(key(KeyCode::Esc)), Some(UiEvent::Esc));
    assert_eq!(map_event(key(KeyCode::Home)), Some(UiEvent::Home));
    assert_eq!(map_event(key(KeyCode::F(1))), None);
    assert_eq!(map_event(Event::Resize(120, 40)), Some(UiEvent::Resize(120, 40)));
}

#[test]
fn test_map_ctrl_c_and_releases() {
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(map_event(ctrl_c), Some(UiEvent::Quit));

    let ctrl_x = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
    assert_eq!(map_event(ctrl_x), None);

    let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(map_event(Event::Key(release)), None);
}

#[tokio::test]
async fn test_mock_terminal_lifecycle() {
    let terminal = Terminal::mock();
    assert!(terminal.draw(screen()).await.is_err());

    terminal.take_over().await.unwrap();
    assert!(terminal.take_over().await.is_err());
    terminal.draw(screen()).await.unwrap();
    assert_eq!(terminal.is_taken_over().await, Some(true));

    terminal.release().await.unwrap();
    assert!(terminal.release().await.is_err());
    assert_eq!(terminal.screens().await.unwrap().len(), 1);
}
