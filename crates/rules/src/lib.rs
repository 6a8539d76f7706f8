//! Rule evaluation for check_json
//!
//! A fetched document is flattened into a [`PropertyMap`] of dotted paths, and
//! rule sets are evaluated against it:
//!
//! - **`flatten`**: JSON value to property map.
//! - **`range`**: Nagios threshold expressions (`10`, `10:`, `~:10`, `10:20`, `@...`).
//! - **`rule`**: parsing of `key_regex,value,level` rule strings into [`Rule`]s.
//! - **`context`**: failure messages enriched with sibling properties.
//! - **`processor`**: the existence, equality and range passes.
//!
//! [`PropertyMap`]: check_json_core::PropertyMap

pub mod context;
pub mod flatten;
pub mod processor;
pub mod range;
pub mod rule;

pub use context::format_context;
pub use flatten::flatten;
pub use processor::{Evaluation, RuleProcessor};
pub use range::{parse_integer, Bounds, RangeSpec};
pub use rule::{Rule, RuleKind, RuleSet};
