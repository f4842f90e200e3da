use crate::{
    ArcStr,
    api::omdb::{ItemDetail, ListRequest, SearchResultItem},
};

/// Everything the views render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    /// Results in display order, appended to by further pages
    pub results: Vec<SearchResultItem>,
    /// The detail being shown, if any
    pub selected_detail: Option<ItemDetail>,
    /// True while a list fetch is in flight
    pub is_loading: bool,
    /// Last page successfully loaded, 1-based
    pub current_page: usize,
    pub total_available: usize,
    /// Empty in default feed mode
    pub active_query: ArcStr,
    pub error_message: Option<ArcStr>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            selected_detail: None,
            is_loading: false,
            current_page: 1,
            total_available: 0,
            active_query: ArcStr::from(""),
            error_message: None,
        }
    }
}

impl BrowseState {
    pub fn is_search(&self) -> bool {
        !self.active_query.is_empty()
    }
}

/// Query parameters of the default "latest movies" feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDefaults {
    pub query: ArcStr,
    pub kind: ArcStr,
    pub year: ArcStr,
}

impl Default for FeedDefaults {
    fn default() -> Self {
        Self {
            query: ArcStr::from("2023"),
            kind: ArcStr::from("movie"),
            year: ArcStr::from("2023"),
        }
    }
}

impl FeedDefaults {
    pub fn request(&self, page: usize) -> ListRequest {
        ListRequest::filtered(self.query.clone(), self.kind.clone(), self.year.clone(), page)
    }
}

/// A fetch the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    List { seq: u64, request: ListRequest },
    Detail { seq: u64, id: ArcStr },
}

impl Fetch {
    pub fn seq(&self) -> u64 {
        match self {
            Fetch::List { seq, .. } | Fetch::Detail { seq, .. } => *seq,
        }
    }
}

/// Lifecycle of the latest list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    /// The last fetch returned results
    Populated,
    /// The last fetch reported no matches
    Empty,
    /// The last fetch did not get an answer
    Failed,
}
