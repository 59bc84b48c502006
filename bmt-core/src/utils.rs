//! Case-conversion and element-formatting utilities
//!
//! The model mixes CamelCase class names, snake_case slot names, CURIE
//! forms, and human-readable sentence-case canonical names. These helpers
//! convert between those shapes; the name resolver builds its fallback
//! pipeline out of them.

use crate::element::Element;
use once_cell::sync::Lazy;
use regex::Regex;

/// Schema URI of the LinkML builtin types; elements imported from it are
/// formatted under the `metatype` prefix rather than the model prefix.
pub const LINKML_TYPES_SCHEMA: &str = "https://w3id.org/linkml/types";

/// Matches the first letter of each space-separated word
static WORD_INITIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^| )([a-zA-Z])").expect("valid pattern"));

/// Convert CamelCase to sentence case.
///
/// Word boundaries fall before an uppercase letter that begins a
/// lowercased run, so acronyms survive intact:
/// `DiseaseOrPhenotypicFeature` becomes `disease or phenotypic feature`
/// while `RNAProduct` becomes `RNA product`.
#[must_use]
pub fn camelcase_to_sentencecase(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        let starts_word = i > 0
            && c.is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
        if starts_word && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .into_iter()
        .map(|w| {
            // only words carrying a lowercase letter get lowered; acronyms keep their case
            if w.chars().any(|c| c.is_ascii_lowercase()) {
                w.to_ascii_lowercase()
            } else {
                w
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert snake_case to sentence case
#[must_use]
pub fn snakecase_to_sentencecase(s: &str) -> String {
    s.replace('_', " ").to_ascii_lowercase()
}

/// Convert sentence case to snake_case
#[must_use]
pub fn sentencecase_to_snakecase(s: &str) -> String {
    s.replace(' ', "_").to_ascii_lowercase()
}

/// Convert sentence case to CamelCase
#[must_use]
pub fn sentencecase_to_camelcase(s: &str) -> String {
    WORD_INITIAL
        .replace_all(s, |caps: &regex::Captures| caps[1].to_ascii_uppercase())
        .into_owned()
}

/// A user-supplied name normalized for lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Case-converted canonical lookup candidate
    pub canonical: String,
    /// Prefix-stripped but not case-converted form, when a recognized
    /// prefix was removed. Covers elements whose canonical name keeps
    /// its underscores.
    pub stripped: Option<String>,
}

/// Normalize a user-supplied name (CURIE, snake_case, CamelCase, or
/// sentence case) into its canonical lookup candidate.
#[must_use]
pub fn parse_name(name: &str, prefix: &str) -> ParsedName {
    if let Some(rest) = name.strip_prefix(&format!("{prefix}:")) {
        let canonical = if rest.contains('_') {
            snakecase_to_sentencecase(rest)
        } else {
            camelcase_to_sentencecase(rest)
        };
        return ParsedName {
            canonical,
            stripped: Some(rest.to_string()),
        };
    }
    let canonical = if name.contains('_') {
        snakecase_to_sentencecase(name)
    } else if name.contains(' ') {
        name.to_string()
    } else {
        camelcase_to_sentencecase(name)
    };
    ParsedName {
        canonical,
        stripped: None,
    }
}

/// Render an element's canonical name in its CURIE display form.
///
/// Classes, types, enums, and subsets format as `prefix:CamelCase`;
/// slots as `prefix:snake_case`; types imported from the LinkML builtin
/// schema under `metatype` instead of the model prefix.
#[must_use]
pub fn format_element(element: &Element, prefix: &str) -> String {
    match element {
        Element::Slot(s) => format!("{prefix}:{}", sentencecase_to_snakecase(&s.name)),
        Element::Type(t) => {
            let effective = if t.from_schema.as_deref() == Some(LINKML_TYPES_SCHEMA) {
                "metatype"
            } else {
                prefix
            };
            format!("{effective}:{}", sentencecase_to_camelcase(&t.name))
        }
        other => format!("{prefix}:{}", sentencecase_to_camelcase(other.name())),
    }
}
