//! The browse controller: the single owner of [`BrowseState`].
//!
//! The controller performs no I/O. Every operation that needs data returns a
//! [`Fetch`] ticket stamped with a sequence number; whoever runs the ticket
//! hands the result back through [`Browse::complete_list`] or
//! [`Browse::complete_detail`]. Only the most recently issued list ticket and
//! detail ticket are accepted, so responses that arrive out of order never
//! overwrite newer state.

use crate::{
    ArcStr,
    api::omdb::{ItemDetail, ListRequest, Outcome, ResultPage},
};

mod data;

pub use data::{BrowseState, FeedDefaults, Fetch, Phase};

/// Shown when OMDb answers a list query with `"Response": "False"`.
pub const NO_MOVIES_FOUND: &str = "No movies found";
/// Shown when a list query fails to reach OMDb or cannot be decoded.
pub const FETCH_FAILED: &str = "An error occurred while fetching movies";

#[derive(Debug, Clone, Copy)]
struct PendingList {
    seq: u64,
    page: usize,
    search: bool,
}

#[derive(Debug)]
pub struct Browse {
    state: BrowseState,
    defaults: FeedDefaults,
    next_seq: u64,
    pending_list: Option<PendingList>,
    pending_detail: Option<u64>,
    phase: Phase,
}

impl Browse {
    pub fn new(defaults: FeedDefaults) -> Self {
        Self {
            state: BrowseState::default(),
            defaults,
            next_seq: 0,
            pending_list: None,
            pending_detail: None,
            phase: Phase::Idle,
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether more results are known to exist beyond the ones shown.
    pub fn has_more(&self) -> bool {
        !self.state.results.is_empty() && self.state.results.len() < self.state.total_available
    }

    /// Page of the list fetch in flight, if any.
    pub fn loading_page(&self) -> Option<usize> {
        self.pending_list.map(|p| p.page)
    }

    fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn start_list(&mut self, page: usize, search: bool, request: ListRequest) -> Fetch {
        let seq = self.issue();
        self.pending_list = Some(PendingList { seq, page, search });
        self.state.is_loading = true;
        self.state.error_message = None;
        self.phase = Phase::Loading;
        Fetch::List { seq, request }
    }

    /// Starts loading `page` of the default feed and leaves search mode.
    pub fn load_default_feed(&mut self, page: usize) -> Fetch {
        let page = page.max(1);
        self.state.active_query = ArcStr::from("");
        let request = self.defaults.request(page);
        self.start_list(page, false, request)
    }

    /// Starts a search for `query`. Blank queries are ignored.
    pub fn search(&mut self, query: &str, page: usize) -> Option<Fetch> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let page = page.max(1);
        self.state.active_query = ArcStr::from(query);
        Some(self.start_list(page, true, ListRequest::search(query, page)))
    }

    /// Starts fetching the detail of `id`. Any detail still in flight is superseded.
    pub fn select_item(&mut self, id: ArcStr) -> Fetch {
        let seq = self.issue();
        self.pending_detail = Some(seq);
        Fetch::Detail { seq, id }
    }

    /// Requests the page after the current one, in whichever mode is active.
    ///
    /// Does nothing while a list is loading or when every result is shown.
    pub fn load_more(&mut self) -> Option<Fetch> {
        if self.state.is_loading || !self.has_more() {
            return None;
        }
        let next = self.state.current_page + 1;
        if self.state.active_query.is_empty() {
            Some(self.load_default_feed(next))
        } else {
            let query = self.state.active_query.clone();
            self.search(&query, next)
        }
    }

    /// Leaves search mode and reloads the first page of the default feed.
    pub fn return_home(&mut self) -> Fetch {
        self.state.active_query = ArcStr::from("");
        self.state.current_page = 1;
        self.load_default_feed(1)
    }

    /// Hides the detail. A detail fetch still in flight will be discarded.
    pub fn close_detail(&mut self) {
        self.state.selected_detail = None;
        self.pending_detail = None;
    }

    /// Applies the result of list ticket `seq`.
    ///
    /// Returns `false`, leaving the state untouched, when `seq` is not the
    /// latest list ticket.
    pub fn complete_list(&mut self, seq: u64, result: anyhow::Result<Outcome<ResultPage>>) -> bool {
        let Some(pending) = self.pending_list.filter(|p| p.seq == seq) else {
            return false;
        };
        self.pending_list = None;
        self.state.is_loading = false;

        match result {
            Ok(Outcome::Found(page)) => {
                if pending.page <= 1 {
                    self.state.results = page.items;
                } else {
                    self.state.results.extend(page.items);
                }
                self.state.total_available = page.total.max(self.state.results.len());
                self.state.current_page = pending.page;
                self.phase = Phase::Populated;
            }
            Ok(Outcome::NotFound(_)) => {
                if pending.search {
                    self.state.results.clear();
                    self.state.total_available = 0;
                }
                self.state.error_message = Some(ArcStr::from(NO_MOVIES_FOUND));
                self.phase = Phase::Empty;
            }
            Err(_) => {
                self.state.error_message = Some(ArcStr::from(FETCH_FAILED));
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Applies the result of detail ticket `seq`.
    ///
    /// Returns `true` only when a detail was shown. Stale tickets, empty
    /// answers and failures leave the current detail as it is.
    pub fn complete_detail(&mut self, seq: u64, result: anyhow::Result<Outcome<ItemDetail>>) -> bool {
        if self.pending_detail != Some(seq) {
            return false;
        }
        self.pending_detail = None;
        match result {
            Ok(Outcome::Found(detail)) => {
                self.state.selected_detail = Some(detail);
                true
            }
            Ok(Outcome::NotFound(_)) | Err(_) => false,
        }
    }
}
