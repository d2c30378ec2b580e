//! Extractive summarization stages.
//!
//! clean → segment → frequency table → scoring → selection → assembly.
//! Each stage is a pure function over the output of the previous one.

pub mod assemble;
pub mod clean;
pub mod frequency;
pub mod scoring;
pub mod segment;
pub mod select;

pub use assemble::{join_sentences, post_process, truncate_words};
pub use clean::{clean_tabular_text, clean_text};
pub use frequency::FrequencyTable;
pub use scoring::{score_sentences, ScoringWeights, SIGNAL_KEYWORDS};
pub use segment::{segment, Sentence, MIN_SENTENCE_WORDS};
pub use select::select_top;
