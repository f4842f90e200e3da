use serde::Deserialize;
use thiserror::Error;

use super::data::{ItemDetail, Outcome, ResultPage, SearchResultItem};
use crate::ArcStr;

/// Ways an OMDb response body can fail to decode.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// The body is not the JSON shape OMDb documents
    #[error("Malformed OMDb response: {0}")]
    Json(#[from] serde_json::Error),

    /// `totalResults` is not a non-negative integer
    #[error("Invalid totalResults value: {0:?}")]
    TotalResults(String),

    /// A successful response lacks a field every title has
    #[error("OMDb response is missing the {0} field")]
    MissingField(&'static str),
}

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_NOT_FOUND: &str = "Movie not found!";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawList {
    response: String,
    error: Option<String>,
    search: Option<Vec<RawItem>>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawItem {
    title: String,
    #[serde(default)]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Type", default)]
    kind: String,
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawDetail {
    response: String,
    error: Option<String>,
    title: Option<String>,
    year: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    poster: Option<String>,
    plot: Option<String>,
    director: Option<String>,
    actors: Option<String>,
    genre: Option<String>,
    runtime: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
}

/// `None` for a missing, empty or `N/A` field.
fn available(value: Option<String>) -> Option<ArcStr> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != NOT_AVAILABLE)
        .map(ArcStr::from)
}

/// Splits a comma separated OMDb field such as `Genre` or `Actors`.
fn split_list(value: Option<String>) -> Vec<ArcStr> {
    available(value)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ArcStr::from)
                .collect()
        })
        .unwrap_or_default()
}

fn not_found(error: Option<String>) -> ArcStr {
    ArcStr::from(error.as_deref().unwrap_or(DEFAULT_NOT_FOUND))
}

/// Decodes the body of a list (`s=`) query.
pub fn parse_list(body: &str) -> Result<Outcome<ResultPage>, OmdbError> {
    let raw: RawList = serde_json::from_str(body)?;
    if raw.response != "True" {
        return Ok(Outcome::NotFound(not_found(raw.error)));
    }

    let items: Vec<SearchResultItem> = raw
        .search
        .ok_or(OmdbError::MissingField("Search"))?
        .into_iter()
        .map(|item| SearchResultItem {
            id: ArcStr::from(item.imdb_id),
            title: ArcStr::from(item.title),
            year: ArcStr::from(item.year),
            kind: ArcStr::from(item.kind),
            poster_url: available(item.poster),
        })
        .collect();

    let total = match raw.total_results {
        Some(total) => total
            .trim()
            .parse::<usize>()
            .map_err(|_| OmdbError::TotalResults(total.clone()))?,
        None => items.len(),
    };

    Ok(Outcome::Found(ResultPage { items, total }))
}

/// Decodes the body of a detail (`i=`) query.
pub fn parse_detail(body: &str) -> Result<Outcome<ItemDetail>, OmdbError> {
    let raw: RawDetail = serde_json::from_str(body)?;
    if raw.response != "True" {
        return Ok(Outcome::NotFound(not_found(raw.error)));
    }

    Ok(Outcome::Found(ItemDetail {
        id: ArcStr::from(raw.imdb_id.ok_or(OmdbError::MissingField("imdbID"))?),
        title: ArcStr::from(raw.title.ok_or(OmdbError::MissingField("Title"))?),
        year: ArcStr::from(raw.year.unwrap_or_default()),
        kind: ArcStr::from(raw.kind.unwrap_or_default()),
        poster_url: available(raw.poster),
        plot: available(raw.plot),
        director: available(raw.director),
        cast: split_list(raw.actors),
        genres: split_list(raw.genre),
        runtime: available(raw.runtime),
        rating: available(raw.imdb_rating),
    }))
}
