//! Casing classification for identifiers.
//!
//! All predicates are ASCII-only: an identifier containing any character
//! outside `[A-Za-z0-9]` is neither PascalCase nor camelCase.

use once_cell::sync::Lazy;
use regex::Regex;

static PASCAL_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("static pattern"));

static CAMEL_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][A-Za-z0-9]*$").expect("static pattern"));

static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z0-9]*|[a-z]+[a-z0-9]*").expect("static pattern"));

/// `true` iff `name` matches `^[A-Z][A-Za-z0-9]*$`.
pub fn is_pascal_case(name: &str) -> bool {
    PASCAL_CASE.is_match(name)
}

/// `true` iff `name` matches `^[a-z][A-Za-z0-9]*$`.
pub fn is_camel_case(name: &str) -> bool {
    CAMEL_CASE.is_match(name)
}

/// Split a compound identifier into its constituent words.
///
/// Runs are extracted greedily left to right: an uppercase letter followed by
/// lowercase letters/digits, or a run of lowercase letters followed by
/// lowercase letters/digits. Consecutive capitals therefore split one letter
/// per word (`"userID"` becomes `["user", "I", "D"]`), and names without any
/// alphabetic run produce an empty vector.
pub fn split_words(name: &str) -> Vec<&str> {
    WORD_RUN.find_iter(name).map(|m| m.as_str()).collect()
}

/// `true` if the string has at least one cased character and none of its
/// cased characters is lowercase.
pub fn is_all_upper(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Uppercase only the first character.
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase only the first character.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Best-effort camelCase suggestion for a violating name.
///
/// Snake-style names are joined with every segment after the first
/// capitalized; an all-uppercase name longer than one character is
/// lowercased; otherwise only a leading capital is lowered. The result is a
/// hint, not a guaranteed valid identifier.
pub fn to_camel_case(name: &str) -> String {
    if name.contains('_') {
        let mut segments = name.split('_').filter(|s| !s.is_empty());
        return match segments.next() {
            Some(first) => {
                let mut out = first.to_lowercase();
                for segment in segments {
                    out.push_str(&capitalize(segment));
                }
                out
            }
            None => name.to_string(),
        };
    }

    if name.chars().count() > 1 && is_all_upper(name) {
        return name.to_lowercase();
    }

    if name.chars().next().is_some_and(char::is_uppercase) {
        return lowercase_first(name);
    }

    name.to_string()
}
