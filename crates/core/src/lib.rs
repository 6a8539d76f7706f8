//! Core domain types, errors, and constants for `check_json`.
//!
//! Everything the evaluation crates share lives here so that the rule engine,
//! the status aggregator and the CLI agree on one vocabulary.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias covering rule
//!   construction, rule evaluation, fetching and document parsing.
//! - **`types`**: the flattened `PropertyMap`, its `Scalar` leaves, and the
//!   `Severity` class of a rule set.
//! - **`constants`**: separators and markers of the rule and range syntax.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
