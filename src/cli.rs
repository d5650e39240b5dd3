use clap::Parser;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::analysis::BranchClassifier;
use crate::parser::CParser;
use crate::report::{ReportFormat, Reporter};
use crate::rewrite::RewriteBuffer;

/// kcov-branch - branch identification and annotation for C coverage
/// instrumentation
#[derive(Parser)]
#[command(name = "kcov-branch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// C source file to analyze
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Also write a copy of the source with a marker at each branch point
    #[arg(short, long)]
    annotate: bool,

    /// Emit report lines as JSON objects instead of the text format
    #[arg(long)]
    json: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let format = if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        };

        let stdout = io::stdout();
        run_file(&self.file, self.annotate, format, stdout.lock())?;
        Ok(())
    }
}

/// Run one full pass over `file`: parse, classify, stream the report to
/// `out`, and in annotate mode write the annotated artifact next to the
/// input. Returns the final branch-weight total.
pub fn run_file<W: Write>(
    file: &Path,
    annotate: bool,
    format: ReportFormat,
    out: W,
) -> Result<u64, Box<dyn Error>> {
    let mut parser = CParser::new()?;
    let unit = parser.parse_file(file)?;

    let mut reporter = Reporter::new(out, format);
    let mut buffer = if annotate {
        Some(RewriteBuffer::new(unit.text().len()))
    } else {
        None
    };

    let total = BranchClassifier::new(&unit, &mut reporter, buffer.as_mut()).run()?;

    // The artifact is only produced if at least one insertion occurred.
    if let Some(buffer) = buffer {
        if buffer.is_modified() {
            fs::write(annotated_path(file), buffer.materialize(unit.text()))?;
        }
    }

    Ok(total)
}

/// Artifact path: the input path with its trailing two characters replaced
/// by `-kcov.c` (`src/prog.c` -> `src/prog-kcov.c`).
fn annotated_path(input: &Path) -> PathBuf {
    let mut name = input.to_string_lossy().into_owned();
    name.pop();
    name.pop();
    name.push_str("-kcov.c");
    PathBuf::from(name)
}
