#![forbid(unsafe_code)]
//! Machine translation of ICU plural messages between languages whose CLDR
//! plural rules differ.
//!
//! A source message such as `{count, plural, one {# file} other {# files}}`
//! is split into its forms, aligned with the plural categories of the target
//! language, translated one branch at a time with a concrete example number
//! protected by a tag, and reassembled into a single plural message.
//!
//! # Quick Start
//!
//! ```rust
//! use plural_mt::{
//!     CldrRuleProvider, IdentityTranslator, PluralTranslation, PluralTranslationRequest,
//!     TranslateOptions,
//! };
//!
//! let translation = PluralTranslation::new(
//!     PluralTranslationRequest {
//!         source_text: "{count, plural, one {# file} other {# files}}",
//!         source_language: "en",
//!         target_language: "cs",
//!         service: "identity".to_string(),
//!         target_language_id: 1,
//!     },
//!     &CldrRuleProvider,
//!     TranslateOptions::default(),
//! )?;
//!
//! let result = translation.translate(&mut IdentityTranslator);
//! assert_eq!(
//!     result.translated_text,
//!     "{count, plural, one {# file} few {# files} many {# files} other {# files}}"
//! );
//! # Ok::<(), plural_mt::Error>(())
//! ```
//!
//! # Pipeline
//!
//! - [`forms`]: source forms parsed from the ICU message
//! - [`align()`]: which source form feeds each target branch, and with which number
//! - [`placeholder`]: tagging the number before translation, restoring `#` after
//! - [`translate`]: per-branch translation and aggregation of price, context and errors

pub mod align;
pub mod error;
pub mod forms;
pub mod icu;
pub mod options;
pub mod placeholder;
pub mod plural_rules;
pub mod translate;
pub mod translator;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    align::{TranslationUnit, align, source_examples},
    error::Error,
    forms::PluralForms,
    icu::{to_plural_string, to_plural_string_with_offset},
    options::TranslateOptions,
    plural_rules::{CldrPluralRules, CldrRuleProvider, PluralRuleProvider, PluralRuleSelector},
    translate::{
        PluralTranslation, PluralTranslationRequest, PluralTranslationResult,
        PluralTranslationSummary, source_examples_for,
    },
    translator::{IdentityTranslator, TranslationOutcome, Translator},
    types::{CategoryKey, ExampleMap, PluralCategory, PluralNumber},
};
