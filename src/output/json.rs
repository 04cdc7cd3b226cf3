use crate::output::traits::{OutputResult, OutputWriter};
use crate::parser::ParseReport;
use std::io::Write;

/// Writes the report as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    /// Pretty-print with indentation
    pub pretty: bool,
}

impl JsonWriter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl OutputWriter for JsonWriter {
    fn write_report(&self, report: &ParseReport, out: &mut dyn Write) -> OutputResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, report)?;
        } else {
            serde_json::to_writer(&mut *out, report)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
