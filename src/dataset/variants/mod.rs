use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;


lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

const VARIANT_SEPARATOR: char = '/';

/// Canonical spelling used for every equality comparison between forms.
/// Whitespace is removed before composing so that a combining mark separated
/// from its base by a space still composes, which keeps this idempotent.
pub fn normalize(form: &str) -> String {
    let compact = WHITESPACE_REGEX.replace_all(form, "");
    compact.nfc().collect()
}

/// Accepted spellings for one grammatical cell.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VariantSet {
    display: Vec<String>,
    normalized: Vec<String>,
}

impl VariantSet {
    pub fn extract(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return VariantSet::default();
        }

        let mut display: Vec<String> = raw
            .split(VARIANT_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        if display.is_empty() {
            display.push(raw.to_owned());
        }

        let mut normalized: Vec<String> = display
            .iter()
            .map(|form| normalize(form))
            .filter(|form| !form.is_empty())
            .unique()
            .collect();
        if normalized.is_empty() {
            normalized.push(normalize(raw));
        }

        VariantSet {
            display,
            normalized,
        }
    }

    pub fn display(&self) -> &[String] {
        &self.display
    }

    pub fn normalized(&self) -> &[String] {
        &self.normalized
    }

    pub fn display_joined(&self) -> String {
        self.display.join(" / ")
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn accepts(&self, normalized_form: &str) -> bool {
        !normalized_form.is_empty() && self.normalized.iter().any(|form| form == normalized_form)
    }

    pub fn intersects(&self, other: &VariantSet) -> bool {
        self.normalized
            .iter()
            .any(|form| other.normalized.contains(form))
    }
}
