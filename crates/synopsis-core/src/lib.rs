//! Synopsis Core: error type, configuration, summary length tiers.

pub mod config;
pub mod error;
pub mod tier;

pub use config::{BatchSettings, DataPaths, InputLimits, SynopsisConfig};
pub use error::{Error, Result};
pub use tier::{LengthTier, TierProfile};
