use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI key events emitted by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    /// Ctrl-C, which raw mode no longer turns into a signal
    Quit,
    /// New terminal size as (width, height)
    Resize(u16, u16),
}

/// Translates a crossterm event. Key releases and unhandled keys map to `None`.
pub fn map_event(event: Event) -> Option<UiEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(width, height) => Some(UiEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<UiEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }
    let event = match key.code {
        KeyCode::Char(c) => UiEvent::Char(c),
        KeyCode::Enter => UiEvent::Enter,
        KeyCode::Esc => UiEvent::Esc,
        KeyCode::Backspace => UiEvent::Backspace,
        KeyCode::Up => UiEvent::Up,
        KeyCode::Down => UiEvent::Down,
        KeyCode::Left => UiEvent::Left,
        KeyCode::Right => UiEvent::Right,
        KeyCode::Home => UiEvent::Home,
        _ => return None,
    };
    Some(event)
}
