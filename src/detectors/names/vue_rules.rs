//! Vue naming rules, keyed by identifier role.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::casing::{is_camel_case, lowercase_first, split_words, to_camel_case, uppercase_first};

use super::config::{IdentifierFact, Severity, Violation, VueRole};
use super::pos::{is_noun_phrase_with, PosTagger};

static JS_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("static pattern"));

static EVENT_HANDLER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(handle|on)").expect("static pattern"));

/// Action verbs that do not belong at the head of a computed value.
const COMPUTED_VERB_PREFIXES: [&str; 11] = [
    "get", "set", "fetch", "load", "save", "update", "delete", "create", "make", "build",
    "generate",
];

const COMPUTED_BOOLEAN_PREFIXES: [&str; 4] = ["is", "has", "can", "should"];

const SHORT_VARIABLE_ALLOW: [&str; 6] = ["i", "j", "k", "x", "y", "z"];
const SHORT_PARAMETER_ALLOW: [&str; 5] = ["id", "x", "y", "z", "ex"];

/// Run every rule registered for `role` against `fact`.
///
/// VM003 short-circuits: a name that is not a plain identifier gets no
/// further checks.
pub fn check(role: VueRole, fact: &IdentifierFact, tagger: &dyn PosTagger) -> Vec<Violation> {
    if role == VueRole::Lifecycle {
        return Vec::new();
    }
    if let Some(v) = check_identifier_chars(fact) {
        return vec![v];
    }

    match role {
        VueRole::Method | VueRole::Watch => check_function(role, fact),
        VueRole::EventHandler => {
            let mut out = check_function(role, fact);
            out.extend(check_event_handler(fact));
            out
        }
        VueRole::Computed => {
            let mut out = check_function(role, fact);
            out.extend(check_computed(fact, tagger));
            out
        }
        VueRole::Variable => check_variable(fact),
        VueRole::Parameter => check_parameter(fact),
        VueRole::Lifecycle => Vec::new(),
    }
}

/// VM003: only ASCII letters, digits, `_` and `$`
pub fn check_identifier_chars(fact: &IdentifierFact) -> Option<Violation> {
    let name = &fact.name;
    if JS_IDENTIFIER.is_match(name) {
        return None;
    }
    Some(Violation::new(
        fact,
        "VM003",
        format!("Vue identifier '{name}' contains invalid characters"),
        Severity::Warning,
    ))
}

/// VM001 camelCase, VM002 descriptive length
pub fn check_function(role: VueRole, fact: &IdentifierFact) -> Vec<Violation> {
    let name = fact.name.as_str();
    let label = role_label(role);
    let mut out = Vec::new();

    if !is_camel_case(name) {
        out.push(Violation::new(
            fact,
            "VM001",
            format!(
                "Vue {label} '{name}' should use camelCase (suggestion: '{}')",
                to_camel_case(name)
            ),
            Severity::Warning,
        ));
    }
    if name.chars().count() <= 2 {
        out.push(Violation::new(
            fact,
            "VM002",
            format!("Vue {label} '{name}' should be more descriptive"),
            Severity::Info,
        ));
    }
    out
}

/// VM004: handlers start with `handle` or `on` followed by a word
pub fn check_event_handler(fact: &IdentifierFact) -> Option<Violation> {
    let name = &fact.name;
    if EVENT_HANDLER_NAME.is_match(name) {
        return None;
    }
    Some(Violation::new(
        fact,
        "VM004",
        format!(
            "Vue event handler '{name}' should start with 'handle' or 'on' (suggestion: 'handle{}')",
            uppercase_first(name)
        ),
        Severity::Info,
    ))
}

/// VM005: computed values read as noun phrases, not actions
pub fn check_computed(fact: &IdentifierFact, tagger: &dyn PosTagger) -> Option<Violation> {
    let name = fact.name.as_str();
    let words = split_words(name);
    let first = words.first().copied().unwrap_or_default();
    let head = first.to_lowercase();

    if COMPUTED_VERB_PREFIXES.contains(&head.as_str()) && words.len() > 1 && name.starts_with(first)
    {
        let remainder = &name[first.len()..];
        return Some(Violation::new(
            fact,
            "VM005",
            format!(
                "Vue computed value '{name}' should not start with the verb '{head}' (suggestion: '{}')",
                lowercase_first(remainder)
            ),
            Severity::Info,
        ));
    }

    if COMPUTED_BOOLEAN_PREFIXES.contains(&head.as_str()) || is_noun_phrase_with(name, tagger) {
        return None;
    }
    Some(Violation::new(
        fact,
        "VM005",
        format!("Vue computed value '{name}' should be a noun or noun phrase"),
        Severity::Info,
    ))
}

/// VV001 camelCase, VV002 single letters outside the loop allow-list
pub fn check_variable(fact: &IdentifierFact) -> Vec<Violation> {
    let name = fact.name.as_str();
    let mut out = Vec::new();

    if !is_camel_case(name) {
        out.push(Violation::new(
            fact,
            "VV001",
            format!(
                "Vue variable '{name}' should use camelCase (suggestion: '{}')",
                to_camel_case(name)
            ),
            Severity::Warning,
        ));
    }
    if name.chars().count() == 1 && !SHORT_VARIABLE_ALLOW.contains(&name) {
        out.push(Violation::new(
            fact,
            "VV002",
            format!("Vue variable '{name}' should be more descriptive"),
            Severity::Info,
        ));
    }
    out
}

/// VP001 camelCase, VP002 names of two characters or fewer
pub fn check_parameter(fact: &IdentifierFact) -> Vec<Violation> {
    let name = fact.name.as_str();
    let mut out = Vec::new();

    if !is_camel_case(name) {
        out.push(Violation::new(
            fact,
            "VP001",
            format!(
                "Vue parameter '{name}' should use camelCase (suggestion: '{}')",
                to_camel_case(name)
            ),
            Severity::Warning,
        ));
    }
    if name.chars().count() <= 2 && !SHORT_PARAMETER_ALLOW.contains(&name) {
        out.push(Violation::new(
            fact,
            "VP002",
            format!("Vue parameter '{name}' should be more descriptive"),
            Severity::Info,
        ));
    }
    out
}

fn role_label(role: VueRole) -> &'static str {
    match role {
        VueRole::Method => "method",
        VueRole::Computed => "computed value",
        VueRole::Watch => "watcher",
        VueRole::EventHandler => "event handler",
        VueRole::Lifecycle => "lifecycle hook",
        VueRole::Variable => "variable",
        VueRole::Parameter => "parameter",
    }
}
