//! Offline translators available from the command line.

use clap::ValueEnum;
use plural_mt::{Error, IdentityTranslator, TranslationOutcome, Translator};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslatorKind {
    /// Return the source text unchanged
    #[default]
    Identity,
    /// Pseudo-localize: wrap the text in brackets, one price unit per character
    Pseudo,
}

impl TranslatorKind {
    pub fn build(self) -> Box<dyn Translator> {
        match self {
            TranslatorKind::Identity => Box::new(IdentityTranslator),
            TranslatorKind::Pseudo => Box::new(PseudoTranslator),
        }
    }
}

/// Marks text as "translated" without touching its content, so untranslated
/// strings stand out in a UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoTranslator;

impl Translator for PseudoTranslator {
    fn translate(&mut self, text: &str) -> Result<TranslationOutcome, Error> {
        let price = text.chars().count() as u64;
        Ok(TranslationOutcome::translated(format!("[{}]", text))
            .with_price(price)
            .with_context_description("pseudo-localized"))
    }
}
