//! TOML configuration for the CLI.
//!
//! ```toml
//! source_language = "en"
//! translator = "pseudo"
//! service = "pseudo"
//!
//! [options]
//! fallback_example = 10
//! ```

use std::path::Path;

use plural_mt::TranslateOptions;
use serde::Deserialize;

use crate::translators::TranslatorKind;

/// Values read from the config file. Command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub service: Option<String>,
    pub translator: Option<TranslatorKind>,
    pub options: TranslateOptions,
}

impl CliConfig {
    /// Reads a config file, or returns the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
        Self::parse(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
