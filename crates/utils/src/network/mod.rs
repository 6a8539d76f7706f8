//! Network-related utilities.
//!
//! ## Key Components
//!
//! - **`fetch`**: builds the endpoint URL from host, port, path and scheme,
//!   and performs the single GET whose body is checked. HTTP error statuses
//!   and connection failures are reported as distinct errors because Nagios
//!   treats them differently.

pub mod fetch;

pub use fetch::{Endpoint, FetchOptions, HttpFetcher};
