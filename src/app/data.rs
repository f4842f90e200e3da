use crate::ArcStr;

/// One-shot commands resolved without the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Page of the default feed
    Latest { page: usize },
    /// Page of a title search
    Search { query: ArcStr, page: usize },
    /// Full record of one title
    Detail { id: ArcStr },
}
