//! Output module for rendering parse results
//!
//! This module handles:
//! - Rendering parse reports as JSON or markdown
//! - Writing them to a file or to stdout
//! - Printing parse statistics

mod json;
mod markdown;
pub mod stats;
mod traits;

pub use json::JsonWriter;
pub use markdown::{format_markdown_report, MarkdownWriter};
pub use stats::{format_statistics, print_statistics};
pub use traits::{OutputError, OutputFormat, OutputResult, OutputWriter};

use crate::parser::ParseReport;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Returns the writer for an output format
pub fn writer_for(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::pretty()),
        OutputFormat::Markdown => Box::new(MarkdownWriter),
    }
}

/// Renders a report to a file, or to stdout when no path is given
///
/// # Arguments
///
/// * `report` - The parse report to render
/// * `format` - Output format
/// * `path` - Destination file; `None` writes to stdout
///
/// # Returns
///
/// * `Ok(())` - Report written and flushed
/// * `Err(OutputError)` - Rendering or writing failed
pub fn write_report(
    report: &ParseReport,
    format: OutputFormat,
    path: Option<&Path>,
) -> OutputResult<()> {
    let writer = writer_for(format);

    match path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            writer.write_report(report, &mut out)?;
            out.flush()?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writer.write_report(report, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
