//! Options for plural translation.

use serde::{Deserialize, Serialize};

/// Example number used for a form when the target locale offers none.
pub const DEFAULT_FALLBACK_EXAMPLE: i64 = 10;

/// Tuning knobs for [`crate::PluralTranslation`] and [`crate::align()`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Number substituted into a CLDR-keyed source form whose category the
    /// target locale has no example for.
    pub fallback_example: i64,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            fallback_example: DEFAULT_FALLBACK_EXAMPLE,
        }
    }
}

impl TranslateOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback example number.
    pub fn with_fallback_example(mut self, fallback_example: i64) -> Self {
        self.fallback_example = fallback_example;
        self
    }
}
