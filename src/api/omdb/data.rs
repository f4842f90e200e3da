use crate::ArcStr;

/// Parameters of one OMDb list query.
///
/// User searches only carry a term; the default feed also filters by type and year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListRequest {
    /// Search term, sent as `s`
    pub term: ArcStr,
    /// Type filter, sent as `type`
    pub kind: Option<ArcStr>,
    /// Year filter, sent as `y`
    pub year: Option<ArcStr>,
    /// 1-based page number
    pub page: usize,
}

impl ListRequest {
    /// A plain title search.
    pub fn search(term: impl Into<ArcStr>, page: usize) -> Self {
        Self {
            term: term.into(),
            kind: None,
            year: None,
            page,
        }
    }

    /// A filtered query. Empty filters are dropped.
    pub fn filtered(term: ArcStr, kind: ArcStr, year: ArcStr, page: usize) -> Self {
        let non_empty = |s: ArcStr| (!s.is_empty()).then_some(s);
        Self {
            term,
            kind: non_empty(kind),
            year: non_empty(year),
            page,
        }
    }
}

/// One entry of a list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// IMDb id, e.g. `tt0111161`
    pub id: ArcStr,
    pub title: ArcStr,
    pub year: ArcStr,
    /// `movie`, `series` or `episode`
    pub kind: ArcStr,
    /// Absent when OMDb reports `N/A`
    pub poster_url: Option<ArcStr>,
}

/// Full record of one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub id: ArcStr,
    pub title: ArcStr,
    pub year: ArcStr,
    pub kind: ArcStr,
    pub poster_url: Option<ArcStr>,
    pub plot: Option<ArcStr>,
    pub director: Option<ArcStr>,
    /// Leading actors, in billing order
    pub cast: Vec<ArcStr>,
    pub genres: Vec<ArcStr>,
    pub runtime: Option<ArcStr>,
    /// IMDb rating as reported, e.g. `9.3`
    pub rating: Option<ArcStr>,
}

impl ItemDetail {
    /// The list-entry view of this title.
    pub fn summary(&self) -> SearchResultItem {
        SearchResultItem {
            id: self.id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            kind: self.kind.clone(),
            poster_url: self.poster_url.clone(),
        }
    }
}

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPage {
    pub items: Vec<SearchResultItem>,
    /// Total matches across all pages, as reported by `totalResults`
    pub total: usize,
}

/// Result of a call that reached OMDb and was decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// `"Response": "True"`
    Found(T),
    /// `"Response": "False"`, with OMDb's `Error` text
    NotFound(ArcStr),
}

impl<T> Outcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::NotFound(_) => None,
        }
    }
}
