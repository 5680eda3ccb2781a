//! Protection of the example number through machine translation.
//!
//! Before translation the placeholder in a template is replaced by a concrete
//! number wrapped in an XML-like tag that translation services keep intact.
//! After translation the tagged span becomes the ICU `#` operator again.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::PluralNumber;

/// Marks where the plural number goes in a source template.
pub const REPLACE_NUMBER_PLACEHOLDER: &str = "{%{REPLACE_NUMBER}%}";

pub const NUMBER_TAG_OPEN: &str = "<x id=\"tolgee-number\">";
pub const NUMBER_TAG_CLOSE: &str = "</x>";

lazy_static! {
    static ref NUMBER_TAG_REGEX: Regex = Regex::new(&format!(
        "{}.*?{}",
        regex::escape(NUMBER_TAG_OPEN),
        regex::escape(NUMBER_TAG_CLOSE)
    ))
    .expect("valid number tag regex");
}

/// Substitutes `number` for the placeholder, wrapped in the number tag when
/// `add_tag` is set. Templates without a placeholder are returned unchanged.
pub fn insert_example(template: &str, number: &PluralNumber, add_tag: bool) -> String {
    let replacement = if add_tag {
        format!("{}{}{}", NUMBER_TAG_OPEN, number, NUMBER_TAG_CLOSE)
    } else {
        number.to_string()
    };
    template.replace(REPLACE_NUMBER_PLACEHOLDER, &replacement)
}

/// Replaces each tagged number span in translated text with `#`.
///
/// Text whose tags were dropped by the translator comes back without `#`.
pub fn restore_number_sign(text: &str) -> String {
    NUMBER_TAG_REGEX.replace_all(text, "#").into_owned()
}
