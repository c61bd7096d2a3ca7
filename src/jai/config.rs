//! Configuration loader for jai-lex.
//!
//! `defaults/jai-lex.default.toml` is embedded into the library so the documented defaults and
//! runtime behavior cannot drift apart. Hosts layer their own files on top with [`Loader`]
//! before deserializing into [`JaiLexConfig`].

use crate::jai::lexing::{CharLiteralKind, LexOptions, Vocabulary};
use crate::jai::outline::OutlineOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../../defaults/jai-lex.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JaiLexConfig {
    pub lexing: LexingConfig,
    pub vocabulary: VocabularyConfig,
    pub outline: OutlineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexingConfig {
    pub char_literal_kind: CharLiteralKind,
}

/// Words added on top of the built-in JAI vocabulary.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
    pub keywords: Vec<String>,
    pub builtins: Vec<String>,
    pub constants: Vec<String>,
    pub type_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    pub include_variables: bool,
}

impl JaiLexConfig {
    pub fn vocabulary(&self) -> Vocabulary {
        let words = &self.vocabulary;
        Vocabulary::jai()
            .with_keywords(words.keywords.iter().cloned())
            .with_builtins(words.builtins.iter().cloned())
            .with_constants(words.constants.iter().cloned())
            .with_type_names(words.type_names.iter().cloned())
    }

    pub fn lex_options(&self) -> LexOptions {
        LexOptions {
            char_literals: self.lexing.char_literal_kind,
        }
    }

    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            include_variables: self.outline.include_variables,
        }
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
        debug!(path = %path.as_ref().display(), "layering config file");
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<JaiLexConfig, ConfigError> {
        let config: JaiLexConfig = self.builder.build()?.try_deserialize()?;
        debug!(?config, "loaded configuration");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<JaiLexConfig, ConfigError> {
    Loader::new().build()
}
