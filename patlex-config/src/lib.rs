//! Shared configuration loader for patlex.
//!
//! `defaults/patlex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PatlexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};

pub use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/patlex.default.toml");

/// Top-level configuration consumed by the patlex CLI and server.
#[derive(Debug, Clone, Deserialize)]
pub struct PatlexConfig {
    pub server: ServerConfig,
    pub render: RenderConfig,
    #[serde(default)]
    pub languages: HashMap<String, LanguageConfig>,
}

/// Settings for the JSON frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub max_input_bytes: usize,
}

/// Defaults applied when a token stream is rendered to HTML.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub raw_categories: Vec<String>,
    pub annotate: bool,
}

/// Per-language knobs, keyed by registry name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub discard: Vec<String>,
}

impl PatlexConfig {
    /// Default discard set for `language`, empty when the language has no entry.
    pub fn discard_for(&self, language: &str) -> Vec<String> {
        self.languages
            .get(language)
            .map(|lang| lang.discard.clone())
            .unwrap_or_default()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PatlexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PatlexConfig, ConfigError> {
    Loader::new().build()
}
