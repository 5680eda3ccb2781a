//! CLDR plural rule lookup and example numbers per locale.
//!
//! The alignment engine only depends on the [`PluralRuleSelector`] and
//! [`PluralRuleProvider`] traits. [`CldrRuleProvider`] is the default
//! implementation, backed by the cardinal rules shipped with `intl_pluralrules`.

use intl_pluralrules::{PluralCategory as IntlCategory, PluralRuleType, PluralRules};
use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    types::{ExampleMap, PluralCategory, PluralNumber},
};

/// Largest integer tried when looking for category examples.
const MAX_INTEGER_EXAMPLE: i64 = 1000;

/// Tried after the small integers; some locales only use `many` for millions.
const LARGE_INTEGER_EXAMPLES: [i64; 1] = [1_000_000];

/// Classifies a number into the plural category of one locale.
pub trait PluralRuleSelector {
    fn select(&self, number: &PluralNumber) -> Option<PluralCategory>;
}

/// Resolves locale tags to plural rules and example numbers.
pub trait PluralRuleProvider {
    /// Rules for `tag`, or `None` if the locale is unknown.
    fn rules_for(&self, tag: &str) -> Option<Box<dyn PluralRuleSelector>>;

    /// One example per category the locale produces. Empty for unknown locales.
    fn examples_for(&self, tag: &str) -> ExampleMap {
        self.rules_for(tag)
            .map(|rules| plural_examples(rules.as_ref()))
            .unwrap_or_default()
    }
}

/// Cardinal CLDR plural rules of a single locale.
pub struct CldrPluralRules {
    rules: PluralRules,
}

impl CldrPluralRules {
    /// Looks up rules for a BCP 47 tag, falling back to the base language.
    pub fn for_tag(tag: &str) -> Result<Self, Error> {
        let lang = parse_language_tag(tag).ok_or_else(|| Error::UnresolvedLocale(tag.into()))?;
        let base = LanguageIdentifier::from_parts(lang.language, None, None, &[]);

        PluralRules::create(lang, PluralRuleType::CARDINAL)
            .or_else(|_| PluralRules::create(base, PluralRuleType::CARDINAL))
            .map(|rules| Self { rules })
            .map_err(|_| Error::UnresolvedLocale(tag.into()))
    }

    /// The locale the rules were resolved for.
    pub fn locale(&self) -> &LanguageIdentifier {
        self.rules.get_locale()
    }
}

impl PluralRuleSelector for CldrPluralRules {
    fn select(&self, number: &PluralNumber) -> Option<PluralCategory> {
        let operand = number.to_string();
        self.rules
            .select(operand.as_str())
            .ok()
            .map(category_from_intl)
    }
}

/// [`PluralRuleProvider`] over the CLDR data in `intl_pluralrules`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrRuleProvider;

impl PluralRuleProvider for CldrRuleProvider {
    fn rules_for(&self, tag: &str) -> Option<Box<dyn PluralRuleSelector>> {
        match CldrPluralRules::for_tag(tag) {
            Ok(rules) => Some(Box::new(rules)),
            Err(e) => {
                tracing::warn!(tag, error = %e, "no plural rules for locale");
                None
            }
        }
    }
}

/// Parses a language tag, accepting `_` as a subtag separator.
pub fn parse_language_tag(tag: &str) -> Option<LanguageIdentifier> {
    let normalized = tag.replace('_', "-");
    normalized.parse().ok()
}

/// Finds the first example number the selector maps to each category.
///
/// Small integers are tried first, then large integers, then fractional
/// tenths, so integer examples win whenever a category has one.
pub fn plural_examples(selector: &dyn PluralRuleSelector) -> ExampleMap {
    let integers = (0..=MAX_INTEGER_EXAMPLE)
        .chain(LARGE_INTEGER_EXAMPLES)
        .map(PluralNumber::Integer);
    let decimals = (1..100)
        .filter(|tenths| tenths % 10 != 0)
        .map(|tenths| PluralNumber::Decimal(f64::from(tenths) / 10.0));

    let mut examples = ExampleMap::new();
    for number in integers.chain(decimals) {
        if examples.len() == PluralCategory::ALL.len() {
            break;
        }
        if let Some(category) = selector.select(&number) {
            examples.entry(category).or_insert(number);
        }
    }
    examples
}

fn category_from_intl(category: IntlCategory) -> PluralCategory {
    match category {
        IntlCategory::ZERO => PluralCategory::Zero,
        IntlCategory::ONE => PluralCategory::One,
        IntlCategory::TWO => PluralCategory::Two,
        IntlCategory::FEW => PluralCategory::Few,
        IntlCategory::MANY => PluralCategory::Many,
        IntlCategory::OTHER => PluralCategory::Other,
    }
}
