//! C# naming rules, one handler per declaration kind.

use crate::core::casing::{is_all_upper, is_camel_case, is_pascal_case};

use super::config::{CSharpKind, IdentifierFact, Severity, Violation};
use super::pos::{is_noun_phrase_with, starts_with_verb_with, PosTagger};

/// Framework methods whose names are fixed by the runtime.
const RESERVED_METHODS: [&str; 5] = ["Main", "ToString", "GetHashCode", "Equals", "Dispose"];

/// Test, visitor and handler style prefixes exempt from both method rules.
const IGNORED_METHOD_PREFIXES: [&str; 10] = [
    "Visit", "Override", "Handle", "On", "Test", "Setup", "TearDown", "Benchmark", "Mock", "Stub",
];

const BOOLEAN_PROPERTY_PREFIXES: [&str; 9] = [
    "Is", "Has", "Can", "Should", "Will", "Would", "Could", "Must", "Might",
];

const SHORT_VARIABLE_ALLOW: [&str; 6] = ["i", "j", "k", "x", "y", "z"];
const SHORT_PARAMETER_ALLOW: [&str; 5] = ["id", "x", "y", "z", "ex"];

/// Run every rule registered for `kind` against `fact`.
pub fn check(kind: CSharpKind, fact: &IdentifierFact, tagger: &dyn PosTagger) -> Vec<Violation> {
    match kind {
        CSharpKind::Class => check_class(fact, tagger),
        CSharpKind::Interface => check_interface(fact),
        CSharpKind::Method => check_method(fact, tagger),
        CSharpKind::Property => check_property(fact, tagger),
        CSharpKind::Field => check_field(fact),
        CSharpKind::Variable => check_variable(fact),
        CSharpKind::Parameter => check_parameter(fact),
    }
}

/// C001 casing, C002 noun phrase
pub fn check_class(fact: &IdentifierFact, tagger: &dyn PosTagger) -> Vec<Violation> {
    let name = &fact.name;
    let mut out = Vec::new();

    if !is_pascal_case(name) {
        out.push(Violation::new(
            fact,
            "C001",
            format!("Class name '{name}' should use PascalCase"),
            Severity::Warning,
        ));
    }
    if !is_noun_phrase_with(name, tagger) {
        out.push(Violation::new(
            fact,
            "C002",
            format!("Class name '{name}' should be a noun or noun phrase"),
            Severity::Info,
        ));
    }
    out
}

/// I001: `I` followed by a PascalCase remainder
pub fn check_interface(fact: &IdentifierFact) -> Vec<Violation> {
    let name = &fact.name;
    let valid = name
        .strip_prefix('I')
        .is_some_and(|rest| is_pascal_case(rest));

    if valid {
        return Vec::new();
    }
    vec![Violation::new(
        fact,
        "I001",
        format!("Interface name '{name}' should start with 'I' and use PascalCase"),
        Severity::Warning,
    )]
}

/// M001 casing, M002 verb-first; reserved and prefixed names are exempt.
pub fn check_method(fact: &IdentifierFact, tagger: &dyn PosTagger) -> Vec<Violation> {
    let name = fact.name.as_str();
    if RESERVED_METHODS.contains(&name)
        || IGNORED_METHOD_PREFIXES.iter().any(|p| name.starts_with(p))
    {
        return Vec::new();
    }

    let mut out = Vec::new();
    if !is_pascal_case(name) {
        out.push(Violation::new(
            fact,
            "M001",
            format!("Method name '{name}' should use PascalCase"),
            Severity::Warning,
        ));
    }
    if !starts_with_verb_with(name, tagger) {
        out.push(Violation::new(
            fact,
            "M002",
            format!("Method name '{name}' should start with a verb"),
            Severity::Info,
        ));
    }
    out
}

/// P001 casing, P002 noun phrase (boolean-style names skip P002)
pub fn check_property(fact: &IdentifierFact, tagger: &dyn PosTagger) -> Vec<Violation> {
    let name = fact.name.as_str();
    let mut out = Vec::new();

    if !is_pascal_case(name) {
        out.push(Violation::new(
            fact,
            "P001",
            format!("Property name '{name}' should use PascalCase"),
            Severity::Warning,
        ));
    }

    let is_boolean = BOOLEAN_PROPERTY_PREFIXES.iter().any(|p| name.starts_with(p));
    if !is_boolean && !is_noun_phrase_with(name, tagger) {
        out.push(Violation::new(
            fact,
            "P002",
            format!("Property name '{name}' should be a noun or noun phrase"),
            Severity::Info,
        ));
    }
    out
}

/// F001: `_camelCase` for private fields, PascalCase otherwise
pub fn check_field(fact: &IdentifierFact) -> Vec<Violation> {
    let name = fact.name.as_str();

    if name.starts_with('_') {
        let rest = name.trim_start_matches('_');
        if is_all_upper(rest) || rest.contains('_') || !is_camel_case(rest) {
            return vec![Violation::new(
                fact,
                "F001",
                format!("Private field name '{name}' should use camelCase (after underscore)"),
                Severity::Warning,
            )];
        }
        return Vec::new();
    }

    if is_pascal_case(name) {
        return Vec::new();
    }
    vec![Violation::new(
        fact,
        "F001",
        format!("Public/internal field name '{name}' should use PascalCase"),
        Severity::Warning,
    )]
}

/// V001 casing, V002 single-letter names outside the loop allow-list
pub fn check_variable(fact: &IdentifierFact) -> Vec<Violation> {
    let name = fact.name.as_str();
    let mut out = Vec::new();

    if !is_camel_case(name) {
        out.push(Violation::new(
            fact,
            "V001",
            format!("Variable name '{name}' should use camelCase"),
            Severity::Warning,
        ));
    }
    if name.chars().count() == 1 && !SHORT_VARIABLE_ALLOW.contains(&name) {
        out.push(Violation::new(
            fact,
            "V002",
            format!("Variable name '{name}' should be more descriptive"),
            Severity::Info,
        ));
    }
    out
}

/// PA001 casing, PA002 names of two characters or fewer
pub fn check_parameter(fact: &IdentifierFact) -> Vec<Violation> {
    let name = fact.name.as_str();
    let mut out = Vec::new();

    if !is_camel_case(name) {
        out.push(Violation::new(
            fact,
            "PA001",
            format!("Parameter name '{name}' should use camelCase"),
            Severity::Warning,
        ));
    }
    if name.chars().count() <= 2 && !SHORT_PARAMETER_ALLOW.contains(&name) {
        out.push(Violation::new(
            fact,
            "PA002",
            format!("Parameter name '{name}' should be more descriptive"),
            Severity::Info,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::names::pos::SharedTagger;

    fn ids(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.rule_id.as_str()).collect()
    }

    fn fact(kind: &str, name: &str) -> IdentifierFact {
        IdentifierFact::new(kind, name, 7)
    }

    #[test]
    fn test_class_rules() {
        assert!(check_class(&fact("class", "Utils"), &SharedTagger).is_empty());
        assert!(check_class(&fact("class", "UserManager"), &SharedTagger).is_empty());
        assert_eq!(
            ids(&check_class(&fact("class", "userManager"), &SharedTagger)),
            vec!["C001"]
        );
        assert_eq!(
            ids(&check_class(&fact("class", "Enabled"), &SharedTagger)),
            vec!["C002"]
        );
    }

    #[test]
    fn test_class_message_and_line() {
        let v = check_class(&fact("class", "user_data"), &SharedTagger);
        assert_eq!(v[0].message, "Class name 'user_data' should use PascalCase");
        assert_eq!(v[0].severity, Severity::Warning);
        assert_eq!(v[0].line, 7);
        assert_eq!(v[0].name, "user_data");
    }

    #[test]
    fn test_interface_rules() {
        assert!(check_interface(&fact("interface", "IRepository")).is_empty());
        assert_eq!(ids(&check_interface(&fact("interface", "Repository"))), vec!["I001"]);
        assert_eq!(ids(&check_interface(&fact("interface", "Irepository"))), vec!["I001"]);
        assert_eq!(ids(&check_interface(&fact("interface", "I"))), vec!["I001"]);
    }

    #[test]
    fn test_method_rules() {
        assert!(check_method(&fact("method", "GenerateReport"), &SharedTagger).is_empty());
        assert_eq!(
            ids(&check_method(&fact("method", "Report"), &SharedTagger)),
            vec!["M002"]
        );
        assert_eq!(
            ids(&check_method(&fact("method", "saveChanges"), &SharedTagger)),
            vec!["M001"]
        );
    }

    #[test]
    fn test_method_exemptions() {
        for name in ["Main", "ToString", "Dispose", "OnLoaded", "HandleClick", "TestParse", "visitor"] {
            let v = check_method(&fact("method", name), &SharedTagger);
            if name == "visitor" {
                // prefixes are case-sensitive
                assert!(!v.is_empty(), "{name}");
            } else {
                assert!(v.is_empty(), "{name}");
            }
        }
    }

    #[test]
    fn test_property_rules() {
        assert!(check_property(&fact("property", "CustomerName"), &SharedTagger).is_empty());
        // boolean-style names skip the noun check
        assert!(check_property(&fact("property", "IsEnabled"), &SharedTagger).is_empty());
        assert_eq!(
            ids(&check_property(&fact("property", "Enabled"), &SharedTagger)),
            vec!["P002"]
        );
        assert_eq!(
            ids(&check_property(&fact("property", "customerName"), &SharedTagger)),
            vec!["P001"]
        );
    }

    #[test]
    fn test_field_rules() {
        assert!(check_field(&fact("field", "_maxCount")).is_empty());
        assert!(check_field(&fact("field", "__maxCount")).is_empty());
        assert!(check_field(&fact("field", "MaxCount")).is_empty());

        let upper = check_field(&fact("field", "_MAX_COUNT"));
        assert_eq!(ids(&upper), vec!["F001"]);
        assert_eq!(
            upper[0].message,
            "Private field name '_MAX_COUNT' should use camelCase (after underscore)"
        );

        assert_eq!(ids(&check_field(&fact("field", "_max_count"))), vec!["F001"]);
        assert_eq!(ids(&check_field(&fact("field", "_MaxCount"))), vec!["F001"]);

        let public = check_field(&fact("field", "maxCount"));
        assert_eq!(
            public[0].message,
            "Public/internal field name 'maxCount' should use PascalCase"
        );
    }

    #[test]
    fn test_variable_rules() {
        assert!(check_variable(&fact("variable", "i")).is_empty());
        assert!(check_variable(&fact("variable", "total")).is_empty());
        assert_eq!(ids(&check_variable(&fact("variable", "a"))), vec!["V002"]);
        assert_eq!(ids(&check_variable(&fact("variable", "A"))), vec!["V001", "V002"]);
        assert_eq!(ids(&check_variable(&fact("variable", "Total"))), vec!["V001"]);
    }

    #[test]
    fn test_parameter_rules() {
        assert!(check_parameter(&fact("parameter", "id")).is_empty());
        assert!(check_parameter(&fact("parameter", "ex")).is_empty());
        assert!(check_parameter(&fact("parameter", "value")).is_empty());
        assert_eq!(ids(&check_parameter(&fact("parameter", "ab"))), vec!["PA002"]);
        assert_eq!(ids(&check_parameter(&fact("parameter", "ID"))), vec!["PA001", "PA002"]);
        assert_eq!(ids(&check_parameter(&fact("parameter", "user_id"))), vec!["PA001"]);
    }

    #[test]
    fn test_dispatch_by_kind() {
        let v = check(CSharpKind::Field, &fact("field", "_MAX_COUNT"), &SharedTagger);
        assert_eq!(ids(&v), vec!["F001"]);
        let v = check(CSharpKind::Interface, &fact("interface", "Service"), &SharedTagger);
        assert_eq!(ids(&v), vec!["I001"]);
    }
}
