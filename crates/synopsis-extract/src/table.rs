//! CSV tables and text-column detection.

use std::io::Read;
use std::path::Path;

use synopsis_core::{Error, Result};

/// Values this long or shorter don't count as prose.
const TEXT_VALUE_MIN_CHARS: usize = 20;
/// Non-empty values sampled per column.
const TEXT_SAMPLE_SIZE: usize = 5;
/// Share of sampled values that must look like prose.
const TEXT_SAMPLE_RATIO: f64 = 0.6;

/// An in-memory CSV table with a header row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV with a header row. Ragged rows are accepted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(Error::InvalidInput("CSV has no header row".into()));
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(bytes)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text, or `""` for a short row.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Columns that mostly hold prose; all columns if none qualify.
    pub fn text_columns(&self) -> Vec<String> {
        let detected: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .filter(|&(col, _)| self.is_text_column(col))
            .map(|(_, name)| name.clone())
            .collect();

        if detected.is_empty() {
            self.headers.clone()
        } else {
            detected
        }
    }

    fn is_text_column(&self, column: usize) -> bool {
        let sample: Vec<&str> = (0..self.rows.len())
            .map(|row| self.cell(row, column))
            .filter(|v| !v.trim().is_empty())
            .take(TEXT_SAMPLE_SIZE)
            .collect();
        if sample.is_empty() {
            return false;
        }

        let text_count = sample
            .iter()
            .filter(|v| v.chars().count() > TEXT_VALUE_MIN_CHARS && v.parse::<f64>().is_err())
            .count();
        text_count as f64 >= sample.len() as f64 * TEXT_SAMPLE_RATIO
    }
}
