//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window, history and `<head>` helpers
//! - [`fetch_json`] - Network fetching with timeout
//! - [`race_with_timeout`] - Promise racing used by fetches and stylesheet loads

pub mod dom;
mod fetch;

pub use fetch::{RaceResult, fetch_json, race_with_timeout};
