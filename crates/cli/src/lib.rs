//! The `check_json` Nagios plugin
//!
//! Parses the command line into a [`CheckConfig`], fetches the document and
//! evaluates both rule sets into a [`StatusReport`].
//!
//! [`StatusReport`]: check_json_nagios::StatusReport

pub mod args;
pub mod check;
pub mod config;

pub use args::Args;
pub use check::{check_document, run};
pub use config::CheckConfig;
