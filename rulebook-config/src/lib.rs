//! Shared configuration loader for the rulebook toolchain.
//!
//! `defaults/rulebook.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RulebookConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use rulebook_babel::HtmlOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rulebook.default.toml");

/// Top-level configuration consumed by rulebook applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RulebookConfig {
    pub html: HtmlConfig,
}

/// Mirrors the knobs exposed by the HTML format.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub table_of_contents: bool,
    pub toc_title: String,
    pub annex_label: String,
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            table_of_contents: config.table_of_contents,
            toc_title: config.toc_title.clone(),
            annex_label: config.annex_label.clone(),
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RulebookConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RulebookConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.html.table_of_contents);
        assert_eq!(config.html.toc_title, "Table des matières");
        assert_eq!(config.html.annex_label, "Annexe");
    }

    #[test]
    fn defaults_match_html_options() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(HtmlOptions::from(&config.html), HtmlOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("html.table_of_contents", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.html.table_of_contents);
    }

    #[test]
    fn user_file_overrides_defaults_partially() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[html]\nannex_label = \"Appendix\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.html.annex_label, "Appendix");
        assert_eq!(config.html.toc_title, "Table des matières");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/definitely/not/here/rulebook.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/rulebook.toml")
            .build()
            .expect("config to build");
        assert!(config.html.table_of_contents);
    }
}
