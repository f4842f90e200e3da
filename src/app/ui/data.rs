use crate::{ArcStr, app::browse::BrowseState};

/// Whether keys go to the search box or drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browsing,
    Editing,
}

/// View-only state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub mode: InputMode,
    /// Contents of the search box
    pub input: String,
    /// Index of the highlighted card
    pub cursor: usize,
    /// Cards per grid row, follows the terminal width
    pub columns: usize,
    /// First visible line of the detail popup
    pub detail_scroll: u16,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: InputMode::Browsing,
            input: String::new(),
            cursor: 0,
            columns: 1,
            detail_scroll: 0,
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(ArcStr),
    LoadMore,
    Select(ArcStr),
    CloseDetail,
    Home,
    Quit,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub browse: BrowseState,
    pub ui: UiState,
    /// Whether the "load more" hint applies
    pub has_more: bool,
    /// Page of the list fetch in flight, if any
    pub loading_page: Option<usize>,
}
