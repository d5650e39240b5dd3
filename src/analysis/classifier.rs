//! Pre-order branch classification over one syntax tree
//!
//! Visits every node depth-first in lexical order. Each branch node yields
//! exactly one [`BranchRecord`], reported as it is found, with a strictly
//! increasing ID and its weight added to the running total. In annotate
//! mode each record also enqueues one marker insertion at the branch's
//! anchor.

use std::io::Write;
use thiserror::Error;
use tree_sitter::Node;

use crate::analysis::{BranchKind, BranchRecord};
use crate::parser::SourceUnit;
use crate::report::Reporter;
use crate::rewrite::{RewriteBuffer, RewriteError};

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

/// One-shot classifier. State lives for exactly one traversal.
pub struct BranchClassifier<'a, W: Write> {
    unit: &'a SourceUnit,
    reporter: &'a mut Reporter<W>,
    rewriter: Option<&'a mut RewriteBuffer>,
    next_id: u64,
    total: u64,
    /// Last resolved file name; inherited by nodes whose own location
    /// lookup is empty. Starts as the empty default.
    current_file: String,
}

impl<'a, W: Write> BranchClassifier<'a, W> {
    pub fn new(
        unit: &'a SourceUnit,
        reporter: &'a mut Reporter<W>,
        rewriter: Option<&'a mut RewriteBuffer>,
    ) -> Self {
        Self {
            unit,
            reporter,
            rewriter,
            next_id: 0,
            total: 0,
            current_file: String::new(),
        }
    }

    /// Traverse the whole unit, then emit the summary line. Returns the
    /// final running total.
    pub fn run(mut self) -> Result<u64, ClassifyError> {
        let root = self.unit.root();
        self.visit(root)?;
        self.reporter.total(self.total)?;
        Ok(self.total)
    }

    fn visit(&mut self, node: Node<'a>) -> Result<(), ClassifyError> {
        if let Some(name) = self.unit.file_name() {
            if self.current_file != name {
                self.current_file = name.to_string();
            }
        }

        match node.kind() {
            "function_definition" => {
                if let Some(name) = self.unit.function_name(node) {
                    self.reporter.function(&name)?;
                }
            }
            "if_statement" => {
                self.record(node, BranchKind::Conditional, condition_anchor(node))?;
            }
            "switch_statement" => {
                // The switch itself is a branch only when no direct label
                // is a default; its case/default children are classified
                // on their own visits either way.
                if !has_default_label(node) {
                    self.record(node, BranchKind::ImplicitDefaultSwitch, condition_anchor(node))?;
                }
            }
            "for_statement" | "while_statement" | "do_statement" => {
                self.record(node, BranchKind::Loop, condition_anchor(node))?;
            }
            "case_statement" => {
                if node.child_by_field_name("value").is_some() {
                    self.record(node, BranchKind::Case, keyword_anchor(node))?;
                } else {
                    self.record(node, BranchKind::Default, colon_anchor(node))?;
                }
            }
            "conditional_expression" => {
                self.record(node, BranchKind::Ternary, condition_anchor(node))?;
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child)?;
        }
        Ok(())
    }

    fn record(
        &mut self,
        node: Node<'a>,
        kind: BranchKind,
        anchor: Option<usize>,
    ) -> Result<(), ClassifyError> {
        let pos = node.start_position();
        let record = BranchRecord {
            id: self.next_id,
            kind,
            line: pos.row as u32 + 1,
            column: pos.column as u32 + 1,
            file: self.current_file.clone(),
            weight: kind.weight(),
        };

        self.reporter.record(&record)?;
        self.next_id += 1;
        self.total += record.weight;

        if let Some(rewriter) = self.rewriter.as_deref_mut() {
            // A loop without a test condition has no anchor and gets no
            // marker, but is still counted above.
            if let Some(offset) = anchor {
                rewriter.insert_after(offset, kind.marker())?;
            }
        }
        Ok(())
    }
}

/// Anchor after the end of a node's condition expression, looking through
/// the parentheses of `if`/`while`/`do`/`switch` conditions.
fn condition_anchor(node: Node<'_>) -> Option<usize> {
    let cond = node.child_by_field_name("condition")?;
    let expr = if cond.kind() == "parenthesized_expression" {
        let mut cursor = cond.walk();
        let inner = cond.named_children(&mut cursor).find(|c| !c.is_extra());
        inner.unwrap_or(cond)
    } else {
        cond
    };
    Some(expr.end_byte())
}

/// Anchor after the `case` keyword.
fn keyword_anchor(node: Node<'_>) -> Option<usize> {
    node.child(0).map(|keyword| keyword.end_byte())
}

/// Anchor after the colon terminating a `default` label.
fn colon_anchor(node: Node<'_>) -> Option<usize> {
    let mut cursor = node.walk();
    let colon = node.children(&mut cursor).find(|c| c.kind() == ":")?;
    Some(colon.end_byte())
}

/// True when any direct label of the switch body is a default label. A
/// default buried in a nested block does not count.
fn has_default_label(node: Node<'_>) -> bool {
    let Some(body) = node.child_by_field_name("body") else {
        return false;
    };
    let mut cursor = body.walk();
    let found = body
        .named_children(&mut cursor)
        .any(|child| child.kind() == "case_statement" && child.child_by_field_name("value").is_none());
    found
}
