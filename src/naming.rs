//! Identifier casing and key-classification helpers shared by every backend.

use once_cell::sync::Lazy;
use regex::Regex;

/// Strict ISO-8601 date-time: date, `T`, time, optional fractional seconds,
/// and a mandatory `Z` or numeric offset. Date-ish strings that miss any part
/// fall through to plain strings.
static ISO_DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})$").unwrap()
});

// Two-pass snake_case boundaries: acronym-run before titlecase first
// ("JSONValue" → "JSON_Value"), then plain lower-to-upper ("userId" → "user_Id").
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static LOWER_UPPER_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

pub fn is_iso_datetime(s: &str) -> bool {
    ISO_DATETIME.is_match(s)
}

/// Split on `-`/`_`, uppercase each segment's first letter, strip separators.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = true;
    for c in s.chars() {
        if c == '-' || c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

pub fn to_snake_case(s: &str) -> String {
    let flat: String = s.chars().map(|c| if c == '-' { '_' } else { c }).collect();
    let step = ACRONYM_BOUNDARY.replace_all(&flat, "${1}_${2}");
    let step = LOWER_UPPER_BOUNDARY.replace_all(&step, "${1}_${2}");
    step.to_lowercase()
}

/// Naive singularization: strip exactly one trailing `s`, nothing smarter.
/// "posts" → "post", but also "status" → "statu"; that asymmetry is part of
/// the observable naming contract. A bare "s" key is left alone so the
/// derived type name never collapses to the empty string.
pub fn singularize(s: &str) -> &str {
    if s.len() > 1 && s.ends_with('s') {
        &s[..s.len() - 1]
    } else {
        s
    }
}
