//! Domain types shared by the rule engine and the status aggregator

mod property_map;
mod scalar;
mod severity;

pub use property_map::PropertyMap;
pub use scalar::Scalar;
pub use severity::Severity;
