//! Alignment of source plural forms with the categories of a target locale.
//!
//! Two candidate lists are built. Form-based units have one entry per source
//! form. Locale-based units have one entry per category the target locale
//! uses, with the template picked by running the target's example number
//! through the source rules. Locale-based units win on key collisions and come
//! last, so with CLDR-ordered examples the list ends in `few, many, other`.
//!
//! Example numbers are the value `#` displays. With an `offset:N` message the
//! raw argument is that value plus `N`, which is what `=N` keys compare against.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::{
    forms::PluralForms,
    options::TranslateOptions,
    placeholder::insert_example,
    plural_rules::PluralRuleSelector,
    types::{CategoryKey, ExampleMap, PluralCategory, PluralNumber},
};

/// Source text prepared for one branch of the translated message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationUnit {
    /// Branch key the translation is stored under.
    pub key: CategoryKey,
    /// Template with the tagged example number substituted.
    pub source_text: String,
}

/// Builds the ordered list of units to translate.
///
/// `source_rules` is `None` when the source locale is unknown; lookups through
/// it then simply miss and fall further down the chain.
pub fn align(
    forms: &PluralForms,
    source_rules: Option<&dyn PluralRuleSelector>,
    target_examples: &ExampleMap,
    options: &TranslateOptions,
) -> Vec<TranslationUnit> {
    let form_based = form_based_units(forms, source_rules, target_examples, options);
    let locale_based = locale_based_units(forms, source_rules, target_examples);
    let locale_keys: HashSet<CategoryKey> = locale_based.iter().map(|unit| unit.key).collect();

    form_based
        .into_iter()
        .filter(|unit| !locale_keys.contains(&unit.key))
        .chain(locale_based)
        .collect()
}

/// Source example per target category, with the number substituted untagged.
pub fn source_examples(
    forms: &PluralForms,
    source_rules: Option<&dyn PluralRuleSelector>,
    target_examples: &ExampleMap,
) -> BTreeMap<PluralCategory, String> {
    target_examples
        .iter()
        .map(|(category, number)| {
            let template = locale_template(forms, source_rules, number);
            (*category, insert_example(template, number, false))
        })
        .collect()
}

fn form_based_units(
    forms: &PluralForms,
    source_rules: Option<&dyn PluralRuleSelector>,
    target_examples: &ExampleMap,
    options: &TranslateOptions,
) -> Vec<TranslationUnit> {
    forms
        .iter()
        .map(|(key, template)| match key {
            CategoryKey::Exact(value) => {
                let shown = PluralNumber::Integer(value.saturating_sub(forms.offset().into()));
                TranslationUnit {
                    key: *key,
                    source_text: insert_example(template, &shown, true),
                }
            }
            CategoryKey::Category(category) => {
                let number = target_examples
                    .get(category)
                    .copied()
                    .unwrap_or(PluralNumber::Integer(options.fallback_example));
                let template = resolve_template(
                    forms,
                    [
                        Some(*key),
                        source_category(source_rules, &number),
                        exact_key(&number, forms.offset()),
                        Some(PluralCategory::Other.into()),
                    ],
                );
                TranslationUnit {
                    key: *key,
                    source_text: insert_example(template, &number, true),
                }
            }
        })
        .collect()
}

fn locale_based_units(
    forms: &PluralForms,
    source_rules: Option<&dyn PluralRuleSelector>,
    target_examples: &ExampleMap,
) -> Vec<TranslationUnit> {
    target_examples
        .iter()
        .map(|(category, number)| {
            let template = locale_template(forms, source_rules, number);
            TranslationUnit {
                key: CategoryKey::Category(*category),
                source_text: insert_example(template, number, true),
            }
        })
        .collect()
}

fn locale_template<'a>(
    forms: &'a PluralForms,
    source_rules: Option<&dyn PluralRuleSelector>,
    number: &PluralNumber,
) -> &'a str {
    resolve_template(
        forms,
        [
            source_category(source_rules, number),
            exact_key(number, forms.offset()),
            Some(PluralCategory::Other.into()),
        ],
    )
}

fn source_category(
    source_rules: Option<&dyn PluralRuleSelector>,
    number: &PluralNumber,
) -> Option<CategoryKey> {
    source_rules
        .and_then(|rules| rules.select(number))
        .map(CategoryKey::Category)
}

/// The `=N` key a displayed number falls under once the offset is added back.
fn exact_key(number: &PluralNumber, offset: u32) -> Option<CategoryKey> {
    match number {
        PluralNumber::Integer(value) => value.checked_add(offset.into()).map(CategoryKey::Exact),
        PluralNumber::Decimal(_) => None,
    }
}

/// First template present among `candidates`, or `""` when all miss.
fn resolve_template<'a, const N: usize>(
    forms: &'a PluralForms,
    candidates: [Option<CategoryKey>; N],
) -> &'a str {
    candidates
        .into_iter()
        .flatten()
        .find_map(|key| forms.get(&key))
        .unwrap_or("")
}
