//! Whole-string pattern matching.
//!
//! A [`PatternMatcher`] only answers "does this exact candidate match". The
//! scanner never asks whether a prefix could eventually match; see the
//! lookahead notes in [`engine`](super::engine).

use crate::error::LexError;
use regex::Regex;

/// One pattern, anchored at both ends of the candidate string.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: String,
    regex: Regex,
}

impl PatternMatcher {
    /// Compile `pattern`. Invalid syntax is a configuration error.
    pub fn new(pattern: &str) -> Result<Self, LexError> {
        let anchored = format!(r"\A(?:{pattern})\z");
        let regex = Regex::new(&anchored)
            .map_err(|e| LexError::config(format!("invalid pattern {pattern:?}: {e}")))?;
        Ok(PatternMatcher {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern text as declared, without the implicit anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True iff the whole of `candidate` satisfies the pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}
