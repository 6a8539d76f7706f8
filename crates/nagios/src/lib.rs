//! Nagios plugin output
//!
//! A plugin reports through its exit code and a single line on stdout. This
//! crate owns both: [`StatusCode`] and the [`StatusReport`] that accumulates
//! messages per severity and renders the line.

pub mod status;

pub use status::{StatusCode, StatusReport};
