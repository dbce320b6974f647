//! Bundled language specifications and the registry that serves them.
//!
//! Each submodule exposes a `spec()` constructor. Category order inside those
//! constructors is significant (earlier categories win ties), so keywords come
//! before identifiers and wrong categories sit right after the literals they
//! guard.

pub mod ash;
pub mod bnf;
pub mod json;
pub mod lua;
pub mod markup;
pub mod python;
pub mod registry;

pub use registry::LanguageRegistry;
