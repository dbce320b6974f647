//! Post-lex transformations
//!
//! Some grammars cannot classify every token locally. Markup table delimiters are
//! the motivating case: whether a `|` opens a row, closes it, or separates cells
//! depends on its neighbours. Such languages attach a [`TransformPipeline`] to their
//! specification and the lexer runs it once, after scanning has finished.
//!
//! # Design
//!
//! Each stage implements [`TokenMapper`] and receives the complete token vector,
//! not a stream: stages are free to look behind at output they already produced
//! (the table stage does exactly that when it finds a header separator).
//! Stages run strictly one after another.
//!
//! Stages hold no per-call state, so one pipeline is shared by every lexer of its
//! language.
//!
//! # Examples
//!
//! ```ignore
//! let pipeline = TransformPipeline::new()
//!     .stage(SpliceMapper::new("normal").always(&["escape"]))
//!     .stage(MergeMapper::new("normal"));
//! let tokens = pipeline.run(tokens)?;
//! ```

pub mod merge;
pub mod splice;
pub mod table;

pub use merge::MergeMapper;
pub use splice::SpliceMapper;
pub use table::{TableCategories, TableRetagMapper};

use crate::error::{LexError, TransformationError};
use crate::lexing::token::Token;
use std::fmt;

/// One pass over a finished token vector.
pub trait TokenMapper: Send + Sync {
    /// Short identifier used in error messages.
    fn name(&self) -> &str;

    /// Rewrite the token vector.
    fn map(&self, tokens: Vec<Token>) -> Result<Vec<Token>, TransformationError>;
}

/// An ordered list of [`TokenMapper`] stages.
#[derive(Default)]
pub struct TransformPipeline {
    stages: Vec<Box<dyn TokenMapper>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        TransformPipeline { stages: Vec::new() }
    }

    /// Append a stage; stages run in the order they were added.
    pub fn stage<M: TokenMapper + 'static>(mut self, mapper: M) -> Self {
        self.stages.push(Box::new(mapper));
        self
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage over `tokens`. The first failing stage aborts the run.
    pub fn run(&self, tokens: Vec<Token>) -> Result<Vec<Token>, LexError> {
        let mut current = tokens;
        for stage in &self.stages {
            current = stage.map(current)?;
        }
        Ok(current)
    }
}

impl fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformPipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}
