//! Common test utilities

#![allow(dead_code)]

use kcov_branch::analysis::BranchClassifier;
use kcov_branch::parser::CParser;
use kcov_branch::report::{ReportFormat, Reporter};
use kcov_branch::rewrite::RewriteBuffer;

/// Classify `source` (named `test.c`) and return the text report plus the
/// final branch-weight total.
pub fn classify(source: &str) -> (String, u64) {
    classify_with_format(source, ReportFormat::Text)
}

/// Classify `source` and return the JSON report plus the total.
pub fn classify_json(source: &str) -> (String, u64) {
    classify_with_format(source, ReportFormat::Json)
}

fn classify_with_format(source: &str, format: ReportFormat) -> (String, u64) {
    let mut parser = CParser::new().expect("C grammar should load");
    let unit = parser
        .parse_source("test.c", source.to_string())
        .expect("source should parse");

    let mut reporter = Reporter::new(Vec::new(), format);
    let total = BranchClassifier::new(&unit, &mut reporter, None)
        .run()
        .expect("classification should succeed");

    let output = String::from_utf8(reporter.into_inner()).expect("report should be UTF-8");
    (output, total)
}

/// Run annotate mode over `source`. Returns the annotated text, or `None`
/// when no insertion occurred.
pub fn annotate(source: &str) -> Option<String> {
    let mut parser = CParser::new().expect("C grammar should load");
    let unit = parser
        .parse_source("test.c", source.to_string())
        .expect("source should parse");

    let mut reporter = Reporter::new(Vec::new(), ReportFormat::Text);
    let mut buffer = RewriteBuffer::new(unit.text().len());
    BranchClassifier::new(&unit, &mut reporter, Some(&mut buffer))
        .run()
        .expect("classification should succeed");

    buffer.is_modified().then(|| buffer.materialize(unit.text()))
}

/// Kind tags of the branch records in a text report, in emission order.
pub fn branch_tags(report: &str) -> Vec<String> {
    report
        .lines()
        .filter(|line| line.starts_with('\t'))
        .map(|line| line.split('\t').nth(1).unwrap_or("").to_string())
        .collect()
}
