//! Statutory rate configuration.
//!
//! Contribution rates, tax brackets and thresholds are data, not code: they
//! are loaded from YAML so a new statutory year ships as a configuration
//! change. A built-in Mauritius 2025 table is provided for callers that do
//! not want to touch the filesystem.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CsgRates, NpfRates, NsfRates, PayeBracket, PayeSchedule, PrgfRates, PrgfTier, StatutoryConfig,
};
