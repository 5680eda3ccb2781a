//! The source plural forms of a message.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    error::Error,
    icu::{parse_plural, replace_number_sign},
    placeholder::REPLACE_NUMBER_PLACEHOLDER,
    types::{CategoryKey, PluralCategory},
};

/// Plural forms of a source message: one template per branch key, in source
/// order. Templates mark the plural number with [`REPLACE_NUMBER_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralForms {
    arg_name: String,
    /// `offset:N` of the message; `#` displays the argument minus this value.
    offset: u32,
    forms: Vec<(CategoryKey, String)>,
}

impl PluralForms {
    /// Builds the store from already extracted templates.
    pub fn new(
        arg_name: impl Into<String>,
        forms: impl IntoIterator<Item = (CategoryKey, String)>,
    ) -> Result<Self, Error> {
        let forms: Vec<(CategoryKey, String)> = forms.into_iter().collect();
        if forms.is_empty() {
            return Err(Error::missing_plural_forms("no plural forms provided"));
        }

        let mut seen = HashSet::new();
        for (key, _) in &forms {
            if !seen.insert(*key) {
                return Err(Error::DuplicateForm(key.to_string()));
            }
        }

        Ok(Self {
            arg_name: arg_name.into(),
            offset: 0,
            forms,
        })
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Parses a source ICU plural message, turning each branch's `#` into the
    /// number placeholder.
    ///
    /// ```
    /// use plural_mt::{CategoryKey, PluralCategory, PluralForms};
    ///
    /// let forms = PluralForms::from_icu("{count, plural, one {# file} other {# files}}")?;
    /// assert_eq!(forms.arg_name(), "count");
    /// assert_eq!(
    ///     forms.get(&CategoryKey::Category(PluralCategory::One)),
    ///     Some("{%{REPLACE_NUMBER}%} file")
    /// );
    /// # Ok::<(), plural_mt::Error>(())
    /// ```
    pub fn from_icu(text: &str) -> Result<Self, Error> {
        let message = parse_plural(text)?;
        let forms = message
            .branches
            .iter()
            .map(|(key, body)| {
                let key: CategoryKey = key.parse()?;
                Ok((key, replace_number_sign(body, REPLACE_NUMBER_PLACEHOLDER)))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let forms = Self::new(message.arg_name, forms)?;
        Ok(forms.with_offset(message.offset.unwrap_or(0)))
    }

    pub fn arg_name(&self) -> &str {
        &self.arg_name
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn get(&self, key: &CategoryKey) -> Option<&str> {
        self.forms
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, template)| template.as_str())
    }

    pub fn get_category(&self, category: PluralCategory) -> Option<&str> {
        self.get(&CategoryKey::Category(category))
    }

    /// Iterates forms in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, &str)> {
        self.forms
            .iter()
            .map(|(key, template)| (key, template.as_str()))
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Always false for a constructed store; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
