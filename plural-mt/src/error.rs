//! All error types for the plural-mt crate.
//!
//! Only [`Error::MissingPluralForms`] and the key errors are fatal. The rest are
//! recorded on a per-category outcome or logged, and the pipeline keeps going.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing plural forms: {0}")]
    MissingPluralForms(String),

    #[error("invalid plural form key `{0}`")]
    InvalidFormKey(String),

    #[error("duplicate plural form `{0}`")]
    DuplicateForm(String),

    #[error("unresolved locale `{0}`")]
    UnresolvedLocale(String),

    #[error("translation error: {message}")]
    Translation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Creates a new translation error with optional source error
    pub fn translation_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Translation {
            message: message.into(),
            source,
        }
    }

    /// Creates a new missing plural forms error
    pub fn missing_plural_forms(reason: impl Into<String>) -> Self {
        Error::MissingPluralForms(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_plural_forms_error() {
        let error = Error::missing_plural_forms("not a plural");
        assert_eq!(error.to_string(), "missing plural forms: not a plural");
    }

    #[test]
    fn test_invalid_form_key_error() {
        let error = Error::InvalidFormKey("=x".to_string());
        assert_eq!(error.to_string(), "invalid plural form key `=x`");
    }

    #[test]
    fn test_duplicate_form_error() {
        let error = Error::DuplicateForm("one".to_string());
        assert_eq!(error.to_string(), "duplicate plural form `one`");
    }

    #[test]
    fn test_unresolved_locale_error() {
        let error = Error::UnresolvedLocale("xx-YY".to_string());
        assert_eq!(error.to_string(), "unresolved locale `xx-YY`");
    }

    #[test]
    fn test_translation_error_with_source() {
        let source_error = Box::new(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
        let error = Error::translation_error("service unavailable", Some(source_error));
        assert_eq!(error.to_string(), "translation error: service unavailable");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_translation_error_without_source() {
        let error = Error::translation_error("quota exceeded", None);
        assert!(std::error::Error::source(&error).is_none());
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidFormKey("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidFormKey"));
        assert!(debug.contains("test"));
    }
}
