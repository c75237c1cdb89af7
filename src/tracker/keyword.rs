//! Keyword detection helpers
//!
//! Pure string functions used by the tracker: the trailing-window heuristic
//! and the boundary-aware keyword pattern.

use regex::Regex;

use crate::config::TriggerLocation;

/// Width of the trailing window compared against suggestion names
pub const SUGGESTION_MATCH_LENGTH: usize = 3;

pub fn last_char(text: &str) -> Option<char> {
    text.chars().next_back()
}

/// Last `n` characters of `text`, or all of it when shorter
pub fn trailing_window(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    text.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(idx, _)| &text[idx..])
        .unwrap_or(text)
}

/// Last space-delimited token
pub fn last_token(text: &str) -> &str {
    text.rsplit(' ').next().unwrap_or(text)
}

/// True when the trimmed, lower-cased window is exactly
/// [`SUGGESTION_MATCH_LENGTH`] characters and occurs in one of `names`.
pub fn is_suggestion_match<'a, I>(window: &str, names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = window.trim().to_lowercase();
    if needle.chars().count() != SUGGESTION_MATCH_LENGTH {
        return false;
    }
    names
        .into_iter()
        .any(|name| name.to_lowercase().contains(&needle))
}

/// Boundary assertion placed before the matcher
pub fn boundary(matcher: &str, trigger: &str, location: TriggerLocation) -> &'static str {
    match location {
        TriggerLocation::Anywhere => "",
        TriggerLocation::NewWordOnly if !matcher.is_empty() && matcher.starts_with(trigger) => {
            r"\B"
        }
        TriggerLocation::NewWordOnly => r"\b",
    }
}

/// `matcher` (case-insensitive) followed by ASCII word characters, or
/// `matcher` alone
pub fn keyword_pattern(
    matcher: &str,
    trigger: &str,
    location: TriggerLocation,
) -> Result<Regex, regex::Error> {
    let boundary = boundary(matcher, trigger, location);
    let escaped = regex::escape(matcher);
    Regex::new(&format!(
        "{boundary}(?i:{escaped})[A-Za-z0-9_-]+|{boundary}(?i:{escaped})"
    ))
}

/// A keyword found in the text, with its byte offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub text: String,
    pub start: usize,
}

impl KeywordMatch {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Last keyword in `text` anchored on `matcher`, with its position
pub fn find_keyword(
    text: &str,
    matcher: &str,
    trigger: &str,
    location: TriggerLocation,
) -> Option<KeywordMatch> {
    let pattern = match keyword_pattern(matcher, trigger, location) {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("Could not build keyword pattern for {:?}: {}", matcher, e);
            return None;
        }
    };

    pattern.find_iter(text).last().map(|m| KeywordMatch {
        text: m.as_str().to_string(),
        start: m.start(),
    })
}

/// Last keyword in `text` anchored on `matcher`
pub fn identify_keyword(
    text: &str,
    matcher: &str,
    trigger: &str,
    location: TriggerLocation,
) -> Option<String> {
    find_keyword(text, matcher, trigger, location).map(|m| m.text)
}

#[cfg(test)]
#[path = "keyword_tests.rs"]
mod keyword_tests;
