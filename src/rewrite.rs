//! Offset-keyed insertions over immutable source text
//!
//! Edits are collected as (offset, text) pairs against the original buffer
//! and applied in one left-to-right pass. Two insertions at the same offset
//! keep the order they were scheduled in. The original text is never
//! mutated in place.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RewriteError {
    /// An insertion targeted an offset the original text cannot support.
    /// This signals a bug in the caller; it is never recovered from.
    #[error("insertion offset {offset} is outside the rewritable range 0..={len}")]
    OffsetOutOfRange { offset: usize, len: usize },
}

#[derive(Debug)]
struct Insertion {
    offset: usize,
    text: String,
}

/// Pending insertions against one original buffer of `len` bytes.
#[derive(Debug)]
pub struct RewriteBuffer {
    len: usize,
    insertions: Vec<Insertion>,
}

impl RewriteBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            insertions: Vec::new(),
        }
    }

    /// Schedule `text` to appear at `offset` in the original buffer, after
    /// anything already scheduled there.
    pub fn insert_after(&mut self, offset: usize, text: &str) -> Result<(), RewriteError> {
        if offset > self.len {
            return Err(RewriteError::OffsetOutOfRange {
                offset,
                len: self.len,
            });
        }
        self.insertions.push(Insertion {
            offset,
            text: text.to_string(),
        });
        Ok(())
    }

    pub fn is_modified(&self) -> bool {
        !self.insertions.is_empty()
    }

    /// Apply all insertions to the original text in a single pass. The sort
    /// is stable, so same-offset insertions keep their scheduling order.
    pub fn materialize(&self, original: &str) -> String {
        let mut ordered: Vec<&Insertion> = self.insertions.iter().collect();
        ordered.sort_by_key(|ins| ins.offset);

        let inserted: usize = ordered.iter().map(|ins| ins.text.len()).sum();
        let mut out = String::with_capacity(original.len() + inserted);

        let mut cursor = 0;
        for ins in ordered {
            out.push_str(&original[cursor..ins.offset]);
            out.push_str(&ins.text);
            cursor = ins.offset;
        }
        out.push_str(&original[cursor..]);
        out
    }
}
