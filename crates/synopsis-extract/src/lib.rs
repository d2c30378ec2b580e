//! Synopsis Extract: rule-based extractive summarization and the helpers
//! around it: validation, metrics, keywords, file and CSV input, batches.

pub mod backend;
pub mod batch;
pub mod export;
pub mod file;
pub mod keywords;
pub mod metrics;
pub mod pipeline;
pub mod samples;
pub mod summarizer;
pub mod table;
pub mod validate;

pub use backend::{create_backend, EngineInfo, ExtractiveBackend, SummarizerBackend};
pub use batch::{summarize_many, BatchRecord, BatchReport, BatchRunner};
pub use metrics::{format_duration, SummaryMetrics};
pub use summarizer::{
    is_sentinel, summarize, ExtractiveSummarizer, Outcome, Summary, Thresholds,
    NO_TEXT_MESSAGE, TOO_SHORT_MESSAGE,
};
pub use table::Table;
pub use validate::{validate_text, Validation};
