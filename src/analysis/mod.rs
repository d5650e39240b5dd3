//! Branch classification

mod branch;
mod classifier;

pub use branch::{BranchKind, BranchRecord};
pub use classifier::{BranchClassifier, ClassifyError};
