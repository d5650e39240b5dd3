//! Streaming branch report
//!
//! One line per classified branch, written as classification happens, plus
//! a line per function definition and one final summary line. The text
//! field order (kind tag, ID, line, column, file name) is consumed by
//! downstream tooling and must stay stable.

use std::io::{self, Write};

use serde_json::json;

use crate::analysis::BranchRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Tab-delimited lines.
    Text,
    /// One JSON object per line.
    Json,
}

pub struct Reporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    /// Emit a line for a function definition the traversal has reached.
    pub fn function(&mut self, name: &str) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(self.out, "function: {name}"),
            ReportFormat::Json => writeln!(self.out, "{}", json!({ "function": name })),
        }
    }

    /// Emit one record for a classified branch.
    pub fn record(&mut self, record: &BranchRecord) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(
                self.out,
                "\t{}\tID: {}\tLine: {}\tColumn: {}\tFilename: {}\t",
                record.kind, record.id, record.line, record.column, record.file
            ),
            ReportFormat::Json => {
                let line = serde_json::to_string(record)?;
                writeln!(self.out, "{line}")
            }
        }
    }

    /// Emit the final summary line.
    pub fn total(&mut self, total: u64) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(self.out, "Total number of branches: {total}"),
            ReportFormat::Json => writeln!(self.out, "{}", json!({ "total_branches": total })),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
