//! Shared utilities for check_json
//!
//! The I/O edges of the plugin: installing the log subscriber and fetching
//! the document to check.

pub mod logging;
pub mod network;

pub use logging::{init, verbosity_filter};
pub use network::{Endpoint, FetchOptions, HttpFetcher};
