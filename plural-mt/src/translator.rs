//! The machine translation boundary.

use crate::error::Error;

/// Result of translating a single string.
#[derive(Debug, Default)]
pub struct TranslationOutcome {
    pub translated_text: Option<String>,
    /// Cost of the call, in whatever unit the service bills.
    pub price: u64,
    pub context_description: Option<String>,
    pub error: Option<Error>,
}

impl TranslationOutcome {
    pub fn translated(text: impl Into<String>) -> Self {
        Self {
            translated_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn failed(error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    pub fn with_context_description(mut self, description: impl Into<String>) -> Self {
        self.context_description = Some(description.into());
        self
    }
}

/// Translates one string at a time.
///
/// Returning `Err` and returning an outcome with `error` set are equivalent;
/// either way only the current plural branch is affected.
pub trait Translator {
    fn translate(&mut self, text: &str) -> Result<TranslationOutcome, Error>;
}

impl<F> Translator for F
where
    F: FnMut(&str) -> Result<TranslationOutcome, Error>,
{
    fn translate(&mut self, text: &str) -> Result<TranslationOutcome, Error> {
        self(text)
    }
}

/// Returns its input unchanged, free of charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&mut self, text: &str) -> Result<TranslationOutcome, Error> {
        Ok(TranslationOutcome::translated(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translator() {
        let outcome = IdentityTranslator.translate("hello").unwrap();
        assert_eq!(outcome.translated_text.as_deref(), Some("hello"));
        assert_eq!(outcome.price, 0);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_closure_translator() {
        let mut calls = Vec::new();
        let mut translator = |text: &str| -> Result<TranslationOutcome, Error> {
            calls.push(text.to_string());
            Ok(TranslationOutcome::translated(text.to_uppercase()).with_price(3))
        };
        let outcome = translator.translate("abc").unwrap();
        assert_eq!(outcome.translated_text.as_deref(), Some("ABC"));
        assert_eq!(outcome.price, 3);
        assert_eq!(calls, vec!["abc"]);
    }

    #[test]
    fn test_failed_outcome() {
        let outcome = TranslationOutcome::failed(Error::translation_error("boom", None))
            .with_context_description("ctx");
        assert!(outcome.translated_text.is_none());
        assert_eq!(outcome.context_description.as_deref(), Some("ctx"));
        assert!(matches!(outcome.error, Some(Error::Translation { .. })));
    }
}
