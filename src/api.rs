//! API module providing high-level interfaces for external services.
//!
//! Actors here intermediate calls to the networking actor and turn raw
//! response bodies into domain types.

pub mod omdb;

pub use omdb::OmdbApi;
