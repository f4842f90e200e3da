//! Terminal view layer.
//!
//! [`UiState`] holds what only the views care about (cursor, input buffer,
//! scroll offset) and turns key presses into [`Intent`]s. It never changes
//! the browse state itself; the app applies intents to the controller.
//! Drawing is a pure function of a [`Screen`] snapshot.

use crate::{ArcStr, app::browse::BrowseState, terminal::UiEvent};

mod data;
mod render;
#[cfg(test)]
mod tests;

pub use data::{InputMode, Intent, Screen, UiState};
pub use render::{CARD_HEIGHT, CARD_WIDTH, columns_for, draw};

impl UiState {
    /// Maps one key press to an intent, updating the view-only state on the way.
    pub fn handle_event(&mut self, event: UiEvent, state: &BrowseState) -> Option<Intent> {
        match event {
            UiEvent::Quit => return Some(Intent::Quit),
            UiEvent::Resize(width, _) => {
                self.columns = columns_for(width);
                return None;
            }
            _ => {}
        }

        match self.mode {
            InputMode::Editing => self.handle_editing(event, state),
            InputMode::Browsing if state.selected_detail.is_some() => self.handle_detail(event),
            InputMode::Browsing => self.handle_browsing(event, state),
        }
    }

    fn handle_editing(&mut self, event: UiEvent, state: &BrowseState) -> Option<Intent> {
        match event {
            UiEvent::Char(c) => self.input.push(c),
            UiEvent::Backspace => {
                self.input.pop();
            }
            UiEvent::Enter => {
                self.mode = InputMode::Browsing;
                self.cursor = 0;
                return Some(Intent::Search(ArcStr::from(self.input.as_str())));
            }
            UiEvent::Esc => {
                self.mode = InputMode::Browsing;
                self.input = state.active_query.to_string();
            }
            _ => {}
        }
        None
    }

    fn handle_detail(&mut self, event: UiEvent) -> Option<Intent> {
        match event {
            UiEvent::Esc | UiEvent::Char('q') => Some(Intent::CloseDetail),
            UiEvent::Up | UiEvent::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
                None
            }
            UiEvent::Down | UiEvent::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }

    fn handle_browsing(&mut self, event: UiEvent, state: &BrowseState) -> Option<Intent> {
        let len = state.results.len();
        let columns = self.columns.max(1);
        match event {
            UiEvent::Char('/') | UiEvent::Char('s') => {
                self.mode = InputMode::Editing;
                self.input = state.active_query.to_string();
            }
            UiEvent::Enter => {
                return state
                    .results
                    .get(self.cursor)
                    .map(|item| Intent::Select(item.id.clone()));
            }
            UiEvent::Char('m') => return Some(Intent::LoadMore),
            UiEvent::Char('g') | UiEvent::Home => {
                self.cursor = 0;
                return Some(Intent::Home);
            }
            UiEvent::Char('q') => return Some(Intent::Quit),
            UiEvent::Left | UiEvent::Char('h') => self.cursor = self.cursor.saturating_sub(1),
            UiEvent::Right | UiEvent::Char('l') => self.move_to(self.cursor + 1, len),
            UiEvent::Up | UiEvent::Char('k') => {
                if self.cursor >= columns {
                    self.cursor -= columns;
                }
            }
            UiEvent::Down | UiEvent::Char('j') => {
                if self.cursor + columns < len {
                    self.cursor += columns;
                }
            }
            _ => {}
        }
        None
    }

    fn move_to(&mut self, index: usize, len: usize) {
        if index < len {
            self.cursor = index;
        }
    }

    /// Brings the view-only state back in line after the browse state changed.
    pub fn sync(&mut self, state: &BrowseState) {
        self.cursor = self.cursor.min(state.results.len().saturating_sub(1));
        if state.selected_detail.is_none() {
            self.detail_scroll = 0;
        }
        if self.mode == InputMode::Browsing {
            self.input = state.active_query.to_string();
        }
    }
}
