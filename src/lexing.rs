//! Lexer
//!
//! This module holds the data-driven lexing engine.
//!
//! Structure:
//!     A language is described by a [`LanguageSpec`]: an ordered list of token
//!     categories, each backed by one or more whole-string patterns. The [`Lexer`]
//!     scans text against a specification and emits [`Token`]s.
//!
//! The pipeline consists of:
//! 1. Scanning: incremental longest match with one character of lookahead
//!    ./engine.rs
//! 2. Optional post-lex transformation pipeline attached to the specification
//!    ./transformations.rs (splice, merge and table re-tagging stages)
//!
//! Rendering of the resulting tokens lives in [`crate::rendering`].

pub mod engine;
pub mod matcher;
pub mod spec;
pub mod token;
pub mod transformations;

pub use engine::Lexer;
pub use matcher::PatternMatcher;
pub use spec::{Category, LanguageSpec, LanguageSpecBuilder};
pub use token::Token;
pub use transformations::{TokenMapper, TransformPipeline};
