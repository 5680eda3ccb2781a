//! Minimal ICU MessageFormat support for plural messages.
//!
//! Only the outer `{arg, plural, ...}` shape is interpreted. Branch bodies are
//! kept as raw ICU text, so nested arguments, selects and plurals pass through
//! untouched.

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref PLURAL_HEADER_REGEX: Regex =
        Regex::new(r"^\{\s*(\w+)\s*,\s*plural\s*,(?:\s*offset\s*:\s*(\d+))?")
            .expect("valid plural header regex");
}

/// A parsed top-level plural message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralMessage {
    pub arg_name: String,
    pub offset: Option<u32>,
    /// `(key, body)` pairs in message order, bodies still ICU-escaped.
    pub branches: Vec<(String, String)>,
}

/// Parses text that consists of exactly one ICU plural message.
pub fn parse_plural(text: &str) -> Result<PluralMessage, Error> {
    let text = text.trim();
    let header = PLURAL_HEADER_REGEX
        .captures(text)
        .ok_or_else(|| Error::missing_plural_forms("text is not an ICU plural message"))?;
    let arg_name = header[1].to_string();
    let offset = header.get(2).and_then(|m| m.as_str().parse().ok());
    let header_end = header.get(0).map_or(0, |m| m.end());

    let mut rest = &text[header_end..];
    let mut branches = Vec::new();
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix('}') {
            if !after.trim().is_empty() {
                return Err(Error::missing_plural_forms(
                    "unexpected text after plural message",
                ));
            }
            break;
        }
        if rest.is_empty() {
            return Err(Error::missing_plural_forms("unterminated plural message"));
        }

        let key_len = rest
            .find(|c: char| c.is_whitespace() || c == '{' || c == '}')
            .unwrap_or(rest.len());
        if key_len == 0 {
            return Err(Error::missing_plural_forms("missing plural form key"));
        }
        let key = &rest[..key_len];
        rest = rest[key_len..].trim_start();

        let Some(body) = rest.strip_prefix('{') else {
            return Err(Error::missing_plural_forms(format!(
                "missing body for plural form `{}`",
                key
            )));
        };
        let body_len = find_closing_brace(body).ok_or_else(|| {
            Error::missing_plural_forms(format!("unterminated body for plural form `{}`", key))
        })?;
        branches.push((key.to_string(), body[..body_len].to_string()));
        rest = &body[body_len + 1..];
    }

    if branches.is_empty() {
        return Err(Error::missing_plural_forms("plural message has no forms"));
    }

    Ok(PluralMessage {
        arg_name,
        offset,
        branches,
    })
}

/// Replaces every unquoted `#` that belongs to this branch (not to a nested
/// argument) with `replacement`.
pub fn replace_number_sign(body: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(body.len() + replacement.len());
    let mut copied = 0;
    let mut depth = 0usize;
    for (index, ch) in unquoted_chars(body) {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '#' if depth == 0 => {
                out.push_str(&body[copied..index]);
                out.push_str(replacement);
                copied = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    out.push_str(&body[copied..]);
    out
}

/// Serializes branches into `{arg, plural, key1 {text1} key2 {text2}}`.
///
/// Branches are written in the given order; nothing is merged or dropped.
pub fn to_plural_string<K, V, I>(forms: I, arg_name: &str) -> String
where
    K: Display,
    V: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    to_plural_string_with_offset(forms, arg_name, 0)
}

/// Like [`to_plural_string`], writing `offset:N` after `plural,` when `N > 0`.
pub fn to_plural_string_with_offset<K, V, I>(forms: I, arg_name: &str, offset: u32) -> String
where
    K: Display,
    V: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let branches = forms
        .into_iter()
        .map(|(key, text)| format!("{} {{{}}}", key, text.as_ref()))
        .collect::<Vec<_>>()
        .join(" ");
    if offset > 0 {
        format!("{{{}, plural, offset:{} {}}}", arg_name, offset, branches)
    } else {
        format!("{{{}, plural, {}}}", arg_name, branches)
    }
}

/// Byte offset of the `}` closing a body whose opening brace was already consumed.
fn find_closing_brace(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, ch) in unquoted_chars(body) {
        match ch {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(index),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Characters outside ICU apostrophe quoting, with their byte offsets.
///
/// `''` is a literal apostrophe; a single `'` before `{`, `}`, `#` or `|`
/// opens a quoted literal that runs to the next single `'`.
fn unquoted_chars(body: &str) -> Vec<(usize, char)> {
    let mut out = Vec::new();
    let mut chars = body.char_indices().peekable();
    let mut quoted = false;
    while let Some((index, ch)) = chars.next() {
        if ch == '\'' {
            match chars.peek() {
                Some((_, '\'')) => {
                    chars.next();
                }
                Some((_, next)) if !quoted && matches!(next, '{' | '}' | '#' | '|') => {
                    quoted = true;
                }
                _ if quoted => quoted = false,
                _ => {}
            }
            continue;
        }
        if !quoted {
            out.push((index, ch));
        }
    }
    out
}
