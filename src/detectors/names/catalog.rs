//! Rule catalog: rule id to description, per dialect.
//!
//! Used by help surfaces only; evaluation never consults it.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use super::config::Dialect;

static CSHARP_RULES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("C001", "Class names should use PascalCase"),
        ("C002", "Class names should be nouns or noun phrases"),
        ("M001", "Method names should use PascalCase"),
        ("M002", "Method names should start with a verb"),
        ("P001", "Property names should use PascalCase"),
        ("P002", "Property names should be nouns or noun phrases"),
        ("F001", "Field names should use camelCase (private) or PascalCase (public)"),
        ("F002", "Field names should be nouns or noun phrases"),
        ("V001", "Variable names should use camelCase"),
        (
            "V002",
            "Variable names should be descriptive (avoid single letters except for loops)",
        ),
        ("PA001", "Parameter names should use camelCase"),
        ("PA002", "Parameter names should be descriptive"),
        ("I001", "Interface names should start with 'I' and use PascalCase"),
    ])
});

static VUE_RULES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        (
            "VM001",
            "Vue methods, computed values, watchers and handlers should use camelCase",
        ),
        ("VM002", "Vue method names should be descriptive (more than two characters)"),
        (
            "VM003",
            "Vue identifiers should contain only ASCII letters, digits, '_' or '$'",
        ),
        ("VM004", "Vue event handlers should start with 'handle' or 'on'"),
        (
            "VM005",
            "Vue computed values should be noun phrases without an action verb prefix",
        ),
        ("VV001", "Vue variable names should use camelCase"),
        (
            "VV002",
            "Vue variable names should be descriptive (avoid single letters except for loops)",
        ),
        ("VP001", "Vue parameter names should use camelCase"),
        ("VP002", "Vue parameter names should be descriptive"),
    ])
});

/// Rule table for `dialect`, in documentation order.
pub fn rules(dialect: Dialect) -> &'static IndexMap<&'static str, &'static str> {
    match dialect {
        Dialect::CSharp => &CSHARP_RULES,
        Dialect::Vue => &VUE_RULES,
    }
}

/// Description of `rule_id` in `dialect`'s catalog.
pub fn describe(dialect: Dialect, rule_id: &str) -> Option<&'static str> {
    rules(dialect).get(rule_id).copied()
}
