//! Summary length tiers and their fixed sentence/word budgets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Coarse length selector for a summary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    /// Two sentences, at most 80 words.
    Short,
    /// Four sentences, at most 150 words.
    #[default]
    Medium,
    /// Six sentences, at most 250 words.
    Long,
}

/// Sentence and word budget attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierProfile {
    /// Number of sentences the selector keeps.
    pub sentence_count: usize,
    /// Word budget enforced after assembly.
    pub max_words: usize,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [Self::Short, Self::Medium, Self::Long];

    pub const fn profile(self) -> TierProfile {
        match self {
            Self::Short => TierProfile {
                sentence_count: 2,
                max_words: 80,
            },
            Self::Medium => TierProfile {
                sentence_count: 4,
                max_words: 150,
            },
            Self::Long => TierProfile {
                sentence_count: 6,
                max_words: 250,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl std::fmt::Display for LengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(Error::InvalidInput(format!(
                "unknown length '{}', expected short, medium or long",
                other
            ))),
        }
    }
}
