//! Branch identification and annotation engine for C coverage instrumentation.
//!
//! Parses one C source file into a syntax tree, enumerates every branch
//! point under a fixed classification convention, assigns sequential IDs,
//! accumulates a total branch-weight count, and optionally writes an
//! annotated copy of the source with an inline marker at each branch
//! point's anchor.

pub mod analysis;
pub mod cli;
pub mod parser;
pub mod report;
pub mod rewrite;
