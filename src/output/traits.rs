//! Output writer trait and error types

use crate::parser::ParseReport;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Renders a parse report to a byte sink
///
/// Implementations only format; choosing the sink (file, stdout) is left to
/// the caller.
pub trait OutputWriter {
    /// Writes the report to `out`
    ///
    /// # Arguments
    ///
    /// * `report` - The parse report to render
    /// * `out` - Destination of the rendered bytes
    fn write_report(&self, report: &ParseReport, out: &mut dyn Write) -> OutputResult<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}
