//! Language registry
//!
//! A registry owns one shared [`LanguageSpec`] per language name. It is built once
//! by whoever needs it (the CLI, the HTTP frontend) and passed around by
//! reference; there is no process-wide registry.

use crate::error::LexError;
use crate::lexing::{LanguageSpec, Lexer};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, Arc<LanguageSpec>>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LanguageRegistry {
            languages: HashMap::new(),
        }
    }

    /// Register a specification under its own name.
    ///
    /// If a language with the same name already exists, it will be replaced.
    pub fn register(&mut self, spec: LanguageSpec) {
        self.languages
            .insert(spec.name().to_string(), Arc::new(spec));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<LanguageSpec>> {
        self.languages.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// List all registered language names (sorted)
    pub fn list_languages(&self) -> Vec<String> {
        let mut names: Vec<_> = self.languages.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build a lexer for `name` that discards `discard`.
    pub fn lexer<I, S>(&self, name: &str, discard: I) -> Result<Lexer, LexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spec = self
            .get(name)
            .ok_or_else(|| LexError::config(format!("unknown language '{name}'")))?;
        Lexer::with_discard(Arc::clone(spec), discard)
    }

    /// Create a registry with every bundled language.
    pub fn with_defaults() -> Result<Self, LexError> {
        let mut registry = Self::new();
        registry.register(super::ash::spec()?);
        registry.register(super::bnf::spec()?);
        registry.register(super::json::spec()?);
        registry.register(super::lua::spec()?);
        registry.register(super::markup::spec()?);
        registry.register(super::python::spec()?);
        Ok(registry)
    }
}
