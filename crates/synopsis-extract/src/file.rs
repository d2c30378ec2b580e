//! Reading input documents from disk.

use std::path::Path;

use synopsis_core::{Error, Result};

/// Supported input file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Markdown,
    Csv,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Self::PlainText,
            "md" | "mdx" | "markdown" => Self::Markdown,
            "csv" => Self::Csv,
            _ => Self::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }
}

/// Read a single document to summarize.
///
/// CSV files are tables, not documents; open them with [`crate::table::Table`].
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::NotFound(path.display().to_string()));
    }
    match FileType::from_path(path) {
        FileType::PlainText | FileType::Markdown => Ok(std::fs::read_to_string(path)?),
        FileType::Csv => Err(Error::UnsupportedFile(format!(
            "{} is a table; summarize it as a batch",
            path.display()
        ))),
        FileType::Unknown => {
            let bytes = std::fs::read(path)?;
            let content = String::from_utf8(bytes).map_err(|_| {
                Error::UnsupportedFile(format!("{} is not UTF-8 text", path.display()))
            })?;
            if looks_binary(&content) {
                tracing::warn!("Refusing binary-looking file: {}", path.display());
                return Err(Error::UnsupportedFile(format!(
                    "{} does not look like text",
                    path.display()
                )));
            }
            Ok(content)
        }
    }
}

fn looks_binary(content: &str) -> bool {
    let control = content
        .chars()
        .filter(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
        .count();
    control > content.len() / 10
}
