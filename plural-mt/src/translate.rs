//! Translation of a whole plural message, one plural branch at a time.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    align::{TranslationUnit, align, source_examples},
    error::Error,
    forms::PluralForms,
    icu::to_plural_string_with_offset,
    options::TranslateOptions,
    placeholder::restore_number_sign,
    plural_rules::{PluralRuleProvider, PluralRuleSelector},
    translator::{TranslationOutcome, Translator},
    types::{CategoryKey, ExampleMap, PluralCategory},
};

/// What to translate, and the identifiers passed through to the result.
#[derive(Debug, Clone)]
pub struct PluralTranslationRequest<'a> {
    /// Source ICU plural message.
    pub source_text: &'a str,
    pub source_language: &'a str,
    pub target_language: &'a str,
    pub service: String,
    pub target_language_id: u64,
}

/// Aggregated outcome of translating every branch of a plural message.
#[derive(Debug)]
pub struct PluralTranslationResult {
    /// The translated ICU plural message.
    pub translated_text: String,
    /// Branch key to translated text, in message order.
    pub forms: Vec<(CategoryKey, String)>,
    /// Sum of the prices of all branch translations.
    pub price: u64,
    /// First context description reported by any branch.
    pub context_description: Option<String>,
    pub service: String,
    pub target_language_id: u64,
    pub base_blank: bool,
    /// First error reported by any branch. The other branches are still translated.
    pub error: Option<Error>,
}

/// A single plural message translation.
///
/// Source forms, source rules and target examples are resolved once in
/// [`PluralTranslation::new`]; nothing is shared between instances.
pub struct PluralTranslation {
    forms: PluralForms,
    source_rules: Option<Box<dyn PluralRuleSelector>>,
    target_examples: ExampleMap,
    target_language: String,
    service: String,
    target_language_id: u64,
    options: TranslateOptions,
}

impl PluralTranslation {
    /// Fails with [`Error::MissingPluralForms`] when the source text is not a
    /// plural message. Unknown locales only weaken the alignment.
    pub fn new(
        request: PluralTranslationRequest<'_>,
        provider: &dyn PluralRuleProvider,
        options: TranslateOptions,
    ) -> Result<Self, Error> {
        let forms = PluralForms::from_icu(request.source_text)?;
        let source_rules = provider.rules_for(request.source_language);
        let target_examples = provider.examples_for(request.target_language);

        Ok(Self {
            forms,
            source_rules,
            target_examples,
            target_language: request.target_language.to_string(),
            service: request.service,
            target_language_id: request.target_language_id,
            options,
        })
    }

    pub fn forms(&self) -> &PluralForms {
        &self.forms
    }

    pub fn target_examples(&self) -> &ExampleMap {
        &self.target_examples
    }

    /// The prepared source strings, in the order they will be translated.
    pub fn units(&self) -> Vec<TranslationUnit> {
        align(
            &self.forms,
            self.source_rules.as_deref(),
            &self.target_examples,
            &self.options,
        )
    }

    /// Calls `translator` once per unit, sequentially, and assembles the result.
    pub fn translate<T>(self, translator: &mut T) -> PluralTranslationResult
    where
        T: Translator + ?Sized,
    {
        let units = self.units();
        let span = tracing::debug_span!(
            "plural_translation",
            target_language = self.target_language.as_str(),
            units = units.len()
        );
        let _enter = span.enter();

        let mut forms = Vec::with_capacity(units.len());
        let mut price: u64 = 0;
        let mut context_description = None;
        let mut error = None;

        for unit in units {
            let outcome = translator
                .translate(&unit.source_text)
                .unwrap_or_else(TranslationOutcome::failed);
            tracing::debug!(key = %unit.key, price = outcome.price, "translated plural form");
            if let Some(e) = &outcome.error {
                tracing::warn!(key = %unit.key, error = %e, "plural form translation failed");
            }

            price = price.saturating_add(outcome.price);
            if context_description.is_none() {
                context_description = outcome.context_description;
            }
            if error.is_none() {
                error = outcome.error;
            }
            let text = outcome
                .translated_text
                .map(|text| restore_number_sign(&text))
                .unwrap_or_default();
            forms.push((unit.key, text));
        }

        PluralTranslationResult {
            translated_text: to_plural_string_with_offset(
                forms.iter().map(|(key, text)| (key, text.as_str())),
                self.forms.arg_name(),
                self.forms.offset(),
            ),
            forms,
            price,
            context_description,
            service: self.service,
            target_language_id: self.target_language_id,
            base_blank: false,
            error,
        }
    }
}

/// Source text per target category with the example number filled in, for
/// showing translators what each target branch is about.
pub fn source_examples_for(
    provider: &dyn PluralRuleProvider,
    source_language: &str,
    target_language: &str,
    forms: &PluralForms,
) -> BTreeMap<PluralCategory, String> {
    let source_rules = provider.rules_for(source_language);
    let target_examples = provider.examples_for(target_language);
    source_examples(forms, source_rules.as_deref(), &target_examples)
}

/// Serializable view of a result, with the error rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralTranslationSummary {
    pub translated_text: String,
    pub forms: Vec<(CategoryKey, String)>,
    pub price: u64,
    pub context_description: Option<String>,
    pub service: String,
    pub target_language_id: u64,
    pub error: Option<String>,
}

impl From<&PluralTranslationResult> for PluralTranslationSummary {
    fn from(result: &PluralTranslationResult) -> Self {
        Self {
            translated_text: result.translated_text.clone(),
            forms: result.forms.clone(),
            price: result.price,
            context_description: result.context_description.clone(),
            service: result.service.clone(),
            target_language_id: result.target_language_id,
            error: result.error.as_ref().map(ToString::to_string),
        }
    }
}
