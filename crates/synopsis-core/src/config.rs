//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tier::LengthTier;

/// Largest number of rows a single batch job may summarize.
pub const MAX_BATCH_ROWS: usize = 50;

/// Paths to the Synopsis data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Uploaded CSV files (`data/uploads/`).
    pub uploads: PathBuf,
    /// Finished batch exports (`data/exports/`).
    pub exports: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            uploads: root.join("uploads"),
            exports: root.join("exports"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.uploads)?;
        std::fs::create_dir_all(&self.exports)?;
        Ok(())
    }
}

/// Caller-side bounds on text accepted for summarization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InputLimits {
    /// Fewer words than this is rejected as too short.
    pub min_words: usize,
    /// More words than this is rejected as too long.
    pub max_words: usize,
    /// Minimum share of alphabetic characters.
    pub min_alpha_ratio: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_words: 10,
            max_words: 10_000,
            min_alpha_ratio: 0.5,
        }
    }
}

/// Defaults for tabular batch jobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Rows processed when a request doesn't say.
    pub default_rows: usize,
    /// Hard cap on rows per job.
    pub max_rows: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            default_rows: 10,
            max_rows: MAX_BATCH_ROWS,
        }
    }
}

/// Top-level Synopsis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynopsisConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Tier used when a request omits `length`.
    pub default_length: LengthTier,
    pub limits: InputLimits,
    pub batch: BatchSettings,
}

impl SynopsisConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        let port = env_parse("PORT").unwrap_or(3003);

        let mut limits = InputLimits::default();
        if let Some(max_words) = env_parse("SYNOPSIS_MAX_INPUT_WORDS") {
            limits.max_words = max_words;
        }

        let mut batch = BatchSettings::default();
        if let Some(rows) = env_parse::<usize>("SYNOPSIS_BATCH_MAX_ROWS") {
            batch.default_rows = rows.clamp(1, MAX_BATCH_ROWS);
        }

        let default_length =
            parse_default_length(std::env::var("SYNOPSIS_DEFAULT_LENGTH").ok().as_deref())?;

        let data_paths = DataPaths::new(data_dir)?;
        tracing::debug!(
            port,
            default_length = %default_length,
            max_words = limits.max_words,
            batch_rows = batch.default_rows,
            "Configuration loaded"
        );

        Ok(Self {
            port,
            data_paths,
            default_length,
            limits,
            batch,
        })
    }
}

/// Tier used when a request omits `length`; an unknown name is a config error.
fn parse_default_length(raw: Option<&str>) -> Result<LengthTier> {
    match raw {
        None => Ok(LengthTier::default()),
        Some(raw) => raw.parse().map_err(|_| {
            Error::Config(format!(
                "SYNOPSIS_DEFAULT_LENGTH must be short, medium or long, got '{}'",
                raw
            ))
        }),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
