//! Branch point data types

use serde::Serialize;

/// Kind of branch point. Kinds are mutually exclusive: every branch node in
/// the tree matches exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BranchKind {
    /// `if` statement
    Conditional,
    /// `switch` with no explicit default label (the unguarded "no match" edge)
    ImplicitDefaultSwitch,
    /// `for`, `while`, or `do` loop
    Loop,
    /// `case` label
    Case,
    /// `?:` conditional expression
    Ternary,
    /// `default` label
    Default,
}

impl BranchKind {
    /// Edges this branch point contributes to the total: 2 for true/false
    /// constructs, 1 for label-style constructs.
    pub fn weight(self) -> u64 {
        match self {
            BranchKind::Conditional | BranchKind::Loop | BranchKind::Ternary => 2,
            BranchKind::ImplicitDefaultSwitch | BranchKind::Case | BranchKind::Default => 1,
        }
    }

    /// Tag used in report lines.
    pub fn tag(self) -> &'static str {
        match self {
            BranchKind::Conditional => "If",
            BranchKind::ImplicitDefaultSwitch => "ImpDef",
            BranchKind::Loop => "Loop",
            BranchKind::Case => "Case",
            BranchKind::Ternary => "?:",
            BranchKind::Default => "Default",
        }
    }

    /// Literal inserted at the branch's anchor in annotate mode.
    pub fn marker(self) -> &'static str {
        match self {
            BranchKind::Conditional => "/* If */",
            BranchKind::ImplicitDefaultSwitch => "/* ImpDef */",
            BranchKind::Loop => "/* Loop */",
            BranchKind::Case => "/* Case */",
            BranchKind::Ternary => "/* ?: */",
            BranchKind::Default => "/* Default */",
        }
    }
}

impl std::fmt::Display for BranchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One classified branch point. Built per visit, reported immediately,
/// never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRecord {
    pub id: u64,
    pub kind: BranchKind,
    /// 1-based source line of the branch node's start.
    pub line: u32,
    /// 1-based source column of the branch node's start.
    pub column: u32,
    pub file: String,
    pub weight: u64,
}
