//! Configuration structs, data types, and core types for naming analysis.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::CodenamerError;

/// Configuration for rule evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Skip C# names that start with `_` before any rule runs.
    ///
    /// This also exempts `_camelCase` private fields from the field rule,
    /// which keys on the leading underscore. Kept on by default to match the
    /// established behaviour; flip it to analyse private fields.
    pub skip_underscore_names: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            skip_underscore_names: true,
        }
    }
}

/// Source dialect whose rule set and fact shape applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// C#, facts supplied by the external Roslyn helper
    CSharp,
    /// Vue single-file components, facts mined from script text
    Vue,
}

impl Dialect {
    /// All supported dialects
    pub const ALL: [Dialect; 2] = [Dialect::CSharp, Dialect::Vue];

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::CSharp => "csharp",
            Dialect::Vue => "vue",
        }
    }

    /// Human-readable name used in messages
    pub fn display_name(self) -> &'static str {
        match self {
            Dialect::CSharp => "C#",
            Dialect::Vue => "Vue",
        }
    }

    /// File extension handled by this dialect (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::CSharp => "cs",
            Dialect::Vue => "vue",
        }
    }

    /// Resolve the dialect from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|d| d.extension() == ext)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = CodenamerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(Dialect::CSharp),
            "vue" => Ok(Dialect::Vue),
            other => Err(CodenamerError::validation(format!(
                "unsupported dialect '{other}' (expected csharp or vue)"
            ))),
        }
    }
}

/// One observed identifier declaration.
///
/// Serde names follow the fact producers' wire shape
/// (`{Type, Name, Line, DataType?}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierFact {
    /// Declaration kind, matched case-insensitively
    #[serde(rename = "Type", default)]
    pub kind: String,
    /// Declared identifier
    #[serde(rename = "Name", default)]
    pub name: String,
    /// 1-based source line (informational)
    #[serde(rename = "Line", default)]
    pub line: usize,
    /// Role refinement (Vue) or declared type (C#)
    #[serde(rename = "DataType", default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Declared `async` (Vue only)
    #[serde(rename = "IsAsync", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_async: bool,
}

impl IdentifierFact {
    /// Create a fact without subtype
    pub fn new(kind: impl Into<String>, name: impl Into<String>, line: usize) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            line,
            subtype: None,
            is_async: false,
        }
    }

    /// Attach a subtype
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Mark as `async`
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }
}

/// A structural problem reported by a fact producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralError {
    /// 1-based line the problem was reported at
    #[serde(default)]
    pub line: usize,
    /// Description
    #[serde(default)]
    pub message: String,
}

impl StructuralError {
    /// Create a structural error
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Violation severity, ordered `Info < Warning < Error`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Style suggestion
    #[default]
    Info,
    /// Convention violation
    Warning,
    /// Reserved; no rule emits it yet
    Error,
}

impl Severity {
    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CodenamerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(CodenamerError::validation(format!(
                "unknown severity '{other}' (expected info, warning or error)"
            ))),
        }
    }
}

/// One rule failure against one fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Line copied from the fact
    pub line: usize,
    /// Name copied from the fact
    pub name: String,
    /// Stable rule code
    pub rule_id: String,
    /// Human-readable explanation, with a suggestion where one exists
    pub message: String,
    /// Severity
    pub severity: Severity,
}

impl Violation {
    /// Create a violation for `fact`
    pub fn new(
        fact: &IdentifierFact,
        rule_id: &str,
        message: String,
        severity: Severity,
    ) -> Self {
        Self {
            line: fact.line,
            name: fact.name.clone(),
            rule_id: rule_id.to_string(),
            message,
            severity,
        }
    }
}

/// Drop violations below `min`, preserving order.
pub fn filter_by_severity(violations: &[Violation], min: Severity) -> Vec<Violation> {
    violations
        .iter()
        .filter(|v| v.severity >= min)
        .cloned()
        .collect()
}

/// Closed set of C# declaration kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CSharpKind {
    /// `class` declaration
    Class,
    /// `interface` declaration
    Interface,
    /// Method declaration
    Method,
    /// Property declaration
    Property,
    /// Field declaration
    Field,
    /// Local variable
    Variable,
    /// Method or lambda parameter
    Parameter,
}

impl CSharpKind {
    /// Resolve a fact's kind string; `None` for kinds without rules.
    pub fn from_fact(fact: &IdentifierFact) -> Option<Self> {
        match fact.kind.trim().to_ascii_lowercase().as_str() {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "method" => Some(Self::Method),
            "property" => Some(Self::Property),
            "field" => Some(Self::Field),
            "variable" => Some(Self::Variable),
            "parameter" => Some(Self::Parameter),
            _ => None,
        }
    }
}

/// Closed set of Vue identifier roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VueRole {
    /// Plain method
    Method,
    /// Computed value
    Computed,
    /// Watcher callback
    Watch,
    /// Framework lifecycle hook
    Lifecycle,
    /// Event handler
    EventHandler,
    /// Reactive state or local binding
    Variable,
    /// Function parameter
    Parameter,
}

impl VueRole {
    /// Wire name, as used in a fact's subtype
    pub fn as_str(self) -> &'static str {
        match self {
            VueRole::Method => "method",
            VueRole::Computed => "computed",
            VueRole::Watch => "watch",
            VueRole::Lifecycle => "lifecycle",
            VueRole::EventHandler => "event_handler",
            VueRole::Variable => "variable",
            VueRole::Parameter => "parameter",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "method" => Some(Self::Method),
            "computed" => Some(Self::Computed),
            "watch" => Some(Self::Watch),
            "lifecycle" => Some(Self::Lifecycle),
            "event_handler" | "eventhandler" => Some(Self::EventHandler),
            "variable" => Some(Self::Variable),
            "parameter" => Some(Self::Parameter),
            _ => None,
        }
    }

    /// Resolve a fact's role.
    ///
    /// A `method` kind is refined by its subtype (an absent or empty subtype
    /// means a plain method); any other kind names the role directly.
    pub fn from_fact(fact: &IdentifierFact) -> Option<Self> {
        let kind = Self::parse(&fact.kind)?;
        if kind != Self::Method {
            return Some(kind);
        }
        match fact.subtype.as_deref().map(str::trim) {
            None | Some("") => Some(Self::Method),
            Some(subtype) => Self::parse(subtype),
        }
    }

    /// Fact kind a miner emits for this role
    pub fn fact_kind(self) -> &'static str {
        match self {
            VueRole::Variable => "variable",
            VueRole::Parameter => "parameter",
            _ => "method",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_parsing() {
        assert_eq!("CSharp".parse::<Dialect>().unwrap(), Dialect::CSharp);
        assert_eq!("c#".parse::<Dialect>().unwrap(), Dialect::CSharp);
        assert_eq!("VUE".parse::<Dialect>().unwrap(), Dialect::Vue);
        assert!("python".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(Dialect::from_path(Path::new("src/Foo.cs")), Some(Dialect::CSharp));
        assert_eq!(Dialect::from_path(Path::new("App.VUE")), Some(Dialect::Vue));
        assert_eq!(Dialect::from_path(Path::new("main.rs")), None);
        assert_eq!(Dialect::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_filter_by_severity_preserves_order() {
        let fact = IdentifierFact::new("variable", "a", 1);
        let violations = vec![
            Violation::new(&fact, "V002", "first".into(), Severity::Info),
            Violation::new(&fact, "V001", "second".into(), Severity::Warning),
            Violation::new(&fact, "V002", "third".into(), Severity::Info),
        ];

        let filtered = filter_by_severity(&violations, Severity::Warning);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message, "second");

        let all = filter_by_severity(&violations, Severity::Info);
        assert_eq!(all, violations);

        assert!(filter_by_severity(&violations, Severity::Error).is_empty());
    }

    #[test]
    fn test_fact_wire_shape() {
        let json = r#"{"Type":"Field","Name":"_count","Line":8,"DataType":"int"}"#;
        let fact: IdentifierFact = serde_json::from_str(json).unwrap();
        assert_eq!(fact.kind, "Field");
        assert_eq!(fact.name, "_count");
        assert_eq!(fact.line, 8);
        assert_eq!(fact.subtype.as_deref(), Some("int"));
        assert!(!fact.is_async);

        let out = serde_json::to_value(IdentifierFact::new("method", "save", 3)).unwrap();
        assert_eq!(out, serde_json::json!({"Type": "method", "Name": "save", "Line": 3}));
    }

    #[test]
    fn test_violation_serializes_lowercase_severity() {
        let fact = IdentifierFact::new("class", "utils", 2);
        let v = Violation::new(&fact, "C001", "msg".into(), Severity::Warning);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["rule_id"], "C001");
        assert_eq!(json["line"], 2);
    }

    #[test]
    fn test_csharp_kind_resolution() {
        assert_eq!(
            CSharpKind::from_fact(&IdentifierFact::new("CLASS", "Foo", 1)),
            Some(CSharpKind::Class)
        );
        assert_eq!(CSharpKind::from_fact(&IdentifierFact::new("using", "System", 1)), None);
    }

    #[test]
    fn test_vue_role_resolution() {
        let plain = IdentifierFact::new("method", "save", 1);
        assert_eq!(VueRole::from_fact(&plain), Some(VueRole::Method));

        let computed = IdentifierFact::new("method", "total", 1).with_subtype("computed");
        assert_eq!(VueRole::from_fact(&computed), Some(VueRole::Computed));

        let handler = IdentifierFact::new("Method", "click", 1).with_subtype("event_handler");
        assert_eq!(VueRole::from_fact(&handler), Some(VueRole::EventHandler));

        let variable = IdentifierFact::new("variable", "count", 1);
        assert_eq!(VueRole::from_fact(&variable), Some(VueRole::Variable));

        let unknown = IdentifierFact::new("method", "x", 1).with_subtype("directive");
        assert_eq!(VueRole::from_fact(&unknown), None);

        let import = IdentifierFact::new("import", "axios", 1);
        assert_eq!(VueRole::from_fact(&import), None);
    }
}
