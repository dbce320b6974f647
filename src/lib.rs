//! # patlex
//!
//! A data-driven lexer. A language is declared as an ordered list of token
//! categories, each backed by whole-string patterns; the engine turns text into
//! a gapless token stream without a hand-written DFA, and languages whose tokens
//! cannot be classified locally attach a post-lex transformation pipeline.
//!
//! ```ignore
//! let registry = LanguageRegistry::with_defaults()?;
//! let lexer = registry.lexer("lua", ["blank"])?;
//! let tokens = lexer.lex("a = 5")?;
//! let html = rendering::render(&tokens, &["blank"], false);
//! ```
//!
//! ## Testing
//!
//! Shared factories and the coverage assertion live in the [testing] module.

pub mod error;
pub mod languages;
pub mod lexing;
pub mod rendering;
pub mod server;
pub mod testing;

pub use error::{LexError, TransformationError};
pub use languages::LanguageRegistry;
pub use lexing::{LanguageSpec, Lexer, Token};
