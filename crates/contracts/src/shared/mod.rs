//! Shared helpers used by several aggregates

pub mod date_range;
pub mod lenient;
pub mod validation;

pub use date_range::DateRange;
pub use validation::ValidationError;
