//! The token: the unit the scanner and the transformations produce.

use serde::{Deserialize, Serialize};
use std::ops::Range as ByteRange;

/// A categorized slice of the source.
///
/// `start` is a byte offset into the source text. Tokens synthesized by a
/// transformation may have empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub category: String,
    pub text: String,
    pub start: usize,
}

impl Token {
    pub fn new(category: impl Into<String>, text: impl Into<String>, start: usize) -> Self {
        Token {
            category: category.into(),
            text: text.into(),
            start,
        }
    }

    /// Offset of the last byte covered by this token (`start + len - 1`).
    ///
    /// Zero-length tokens report their start.
    pub fn end(&self) -> usize {
        (self.start + self.text.len()).saturating_sub(1).max(self.start)
    }

    /// Half-open byte range covered by this token.
    pub fn span(&self) -> ByteRange<usize> {
        self.start..self.start + self.text.len()
    }

    pub fn is(&self, category: &str) -> bool {
        self.category == category
    }
}
