//! Error taxonomy shared by specification construction, scanning and the
//! post-lex transformations.
//!
//! Every variant is fatal for the call that produced it: the lexer never
//! returns a partial token stream.

use thiserror::Error;

/// Errors produced while building or running a lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The language specification (or a discard/wrong reference into it) is malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Two candidates tied in a way category order could not resolve.
    #[error("ambiguous match at offset {start}: categories {categories:?} tie for {text:?}")]
    Ambiguity {
        start: usize,
        text: String,
        categories: Vec<String>,
    },

    /// A token was about to be emitted in a category declared as wrong.
    #[error("wrong category '{category}' matched {text:?} at offset {start}")]
    WrongCategory {
        category: String,
        text: String,
        start: usize,
    },

    /// Trailing input that no category covers.
    #[error("unlexable input at offset {start}: {text:?}")]
    Unlexable { start: usize, text: String },

    /// A post-lex transformation met a stream shape it cannot resolve.
    #[error(transparent)]
    TransformInvariant(#[from] TransformationError),
}

impl LexError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        LexError::Configuration(msg.into())
    }
}

/// Failure reported by a single transformation stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transformation '{stage}' failed: {message}")]
pub struct TransformationError {
    pub stage: String,
    pub message: String,
}

impl TransformationError {
    pub fn new(stage: impl Into<String>, message: impl Into<String>) -> Self {
        TransformationError {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
