//! Library entry point for the movie-info crate.
//! This file re-exports key types for use in the binary and in tests.

pub mod api;
pub mod app;
pub mod env;
pub mod fs;
pub mod log;
pub mod net;
pub mod terminal;
pub mod utils;

pub use utils::*;

/// Default buffer size used for the actor channels in the application.
pub const BUFFER_SIZE: usize = 128;
