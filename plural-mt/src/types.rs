//! Core types shared by every stage of the plural translation pipeline.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Standard CLDR plural forms, in CLDR order.
#[derive(Ord, PartialOrd, Eq, PartialEq, Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
#[derive(Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// The lower-case CLDR keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ZERO" => Ok(PluralCategory::Zero),
            "ONE" => Ok(PluralCategory::One),
            "TWO" => Ok(PluralCategory::Two),
            "FEW" => Ok(PluralCategory::Few),
            "MANY" => Ok(PluralCategory::Many),
            "OTHER" => Ok(PluralCategory::Other),
            _ => Err(format!("Unknown plural category: {}", s)),
        }
    }
}

/// Key of a single plural branch: a CLDR keyword (`one`) or an exact value (`=0`).
///
/// Exact values are whole numbers; `=1.5` does not parse. Keywords are
/// lower-case as in ICU messages, so `ONE` does not parse either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Category(PluralCategory),
    Exact(i64),
}

impl CategoryKey {
    pub fn category(&self) -> Option<PluralCategory> {
        match self {
            CategoryKey::Category(category) => Some(*category),
            CategoryKey::Exact(_) => None,
        }
    }
}

impl From<PluralCategory> for CategoryKey {
    fn from(category: PluralCategory) -> Self {
        CategoryKey::Category(category)
    }
}

impl Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKey::Category(category) => write!(f, "{}", category),
            CategoryKey::Exact(value) => write!(f, "={}", value),
        }
    }
}

impl FromStr for CategoryKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(value) = s.strip_prefix('=') {
            return value
                .parse::<i64>()
                .map(CategoryKey::Exact)
                .map_err(|_| Error::InvalidFormKey(s.to_string()));
        }
        PluralCategory::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .map(|category| CategoryKey::Category(*category))
            .ok_or_else(|| Error::InvalidFormKey(s.to_string()))
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A concrete number standing in for the plural argument.
///
/// `Decimal` is meant for fractional values such as `1.5`; whole numbers should
/// use `Integer` so they render without a trailing `.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PluralNumber {
    Integer(i64),
    Decimal(f64),
}

impl PluralNumber {
    /// The exact-value key (`=N`) addressing this number, if it is an integer.
    pub fn exact_key(&self) -> Option<CategoryKey> {
        match self {
            PluralNumber::Integer(value) => Some(CategoryKey::Exact(*value)),
            PluralNumber::Decimal(_) => None,
        }
    }
}

impl From<i64> for PluralNumber {
    fn from(value: i64) -> Self {
        PluralNumber::Integer(value)
    }
}

impl Display for PluralNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluralNumber::Integer(value) => write!(f, "{}", value),
            PluralNumber::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// One representative number per plural category a locale actually produces.
/// Iterates in CLDR category order.
pub type ExampleMap = BTreeMap<PluralCategory, PluralNumber>;
