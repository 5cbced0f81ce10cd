//! Fact-to-violation evaluation for both dialects.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::config::{CSharpKind, Dialect, IdentifierFact, RulesConfig, Violation, VueRole};
use super::pos::{PosTagger, SharedTagger};
use super::role::is_lifecycle_hook;
use super::{csharp_rules, vue_rules};

/// Stateless rule engine; the same facts always produce the same violations.
#[derive(Clone)]
pub struct NamingEngine {
    config: RulesConfig,
    tagger: Arc<dyn PosTagger>,
}

impl NamingEngine {
    /// Create an engine backed by the embedded POS lexicon
    pub fn new(config: RulesConfig) -> Self {
        Self {
            config,
            tagger: Arc::new(SharedTagger),
        }
    }

    /// Replace the POS tagger used by the semantic checks
    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Active rule configuration
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Evaluate `facts` in order and collect every violation.
    ///
    /// Facts with an empty or synthesized (`<...>`) name, lifecycle hook names,
    /// and facts whose kind has no registered rules are skipped.
    pub fn evaluate(&self, facts: &[IdentifierFact], dialect: Dialect) -> Vec<Violation> {
        let mut violations = Vec::new();

        for fact in facts {
            if self.should_skip(fact, dialect) {
                continue;
            }

            match dialect {
                Dialect::CSharp => match CSharpKind::from_fact(fact) {
                    Some(kind) => {
                        violations.extend(csharp_rules::check(kind, fact, self.tagger.as_ref()))
                    }
                    None => trace!("No C# rules for kind '{}' ({})", fact.kind, fact.name),
                },
                Dialect::Vue => match VueRole::from_fact(fact) {
                    Some(role) => {
                        violations.extend(vue_rules::check(role, fact, self.tagger.as_ref()))
                    }
                    None => trace!(
                        "No Vue rules for kind '{}' subtype {:?} ({})",
                        fact.kind,
                        fact.subtype,
                        fact.name
                    ),
                },
            }
        }

        violations
    }

    fn should_skip(&self, fact: &IdentifierFact, dialect: Dialect) -> bool {
        let name = fact.name.as_str();
        if name.is_empty() || name.starts_with('<') {
            return true;
        }
        if dialect == Dialect::CSharp && self.config.skip_underscore_names && name.starts_with('_') {
            return true;
        }
        is_lifecycle_hook(name)
    }
}

impl Default for NamingEngine {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl fmt::Debug for NamingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Evaluate `facts` with the default configuration.
pub fn evaluate(facts: &[IdentifierFact], dialect: Dialect) -> Vec<Violation> {
    NamingEngine::default().evaluate(facts, dialect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{CodenamerError, Result};
    use crate::detectors::names::catalog;
    use crate::detectors::names::config::Severity;
    use crate::detectors::names::pos::PosTag;

    struct FailingTagger;

    impl PosTagger for FailingTagger {
        fn tag(&self, _word: &str) -> Result<PosTag> {
            Err(CodenamerError::internal("tagger offline"))
        }
    }

    fn csharp_facts() -> Vec<IdentifierFact> {
        vec![
            IdentifierFact::new("Class", "userService", 1),
            IdentifierFact::new("Interface", "Repository", 2),
            IdentifierFact::new("Method", "Report", 3),
            IdentifierFact::new("Property", "Enabled", 4),
            IdentifierFact::new("Field", "maxCount", 5),
            IdentifierFact::new("Variable", "a", 6),
            IdentifierFact::new("Parameter", "ab", 7),
            IdentifierFact::new("using", "System", 8),
        ]
    }

    fn vue_facts() -> Vec<IdentifierFact> {
        vec![
            IdentifierFact::new("method", "Save_User", 1).with_subtype("method"),
            IdentifierFact::new("method", "getTotal", 2).with_subtype("computed"),
            IdentifierFact::new("method", "clicked", 3).with_subtype("event_handler"),
            IdentifierFact::new("method", "mounted", 4).with_subtype("lifecycle"),
            IdentifierFact::new("variable", "q", 5),
            IdentifierFact::new("parameter", "e", 6),
            IdentifierFact::new("method", "bad-name", 7).with_subtype("method"),
            IdentifierFact::new("import", "axios", 8),
        ]
    }

    fn ids(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.rule_id.as_str()).collect()
    }

    #[test]
    fn test_csharp_dispatch_order() {
        let violations = evaluate(&csharp_facts(), Dialect::CSharp);
        assert_eq!(
            ids(&violations),
            vec!["C001", "I001", "M002", "P002", "F001", "V002", "PA002"]
        );
        assert_eq!(violations[0].line, 1);
        assert_eq!(violations[6].line, 7);
    }

    #[test]
    fn test_vue_dispatch_order() {
        let violations = evaluate(&vue_facts(), Dialect::Vue);
        assert_eq!(
            ids(&violations),
            vec!["VM001", "VM005", "VM004", "VV002", "VP002", "VM003"]
        );
    }

    #[test]
    fn test_skips_synthesized_and_empty_names() {
        let facts = vec![
            IdentifierFact::new("class", "", 1),
            IdentifierFact::new("class", "<Main>$", 2),
            IdentifierFact::new("method", "<lambda>", 3).with_subtype("method"),
        ];
        assert!(evaluate(&facts, Dialect::CSharp).is_empty());
        assert!(evaluate(&facts, Dialect::Vue).is_empty());
    }

    #[test]
    fn test_underscore_names_skipped_by_default() {
        let facts = vec![IdentifierFact::new("Field", "_MAX_COUNT", 4)];
        assert!(evaluate(&facts, Dialect::CSharp).is_empty());

        let engine = NamingEngine::new(RulesConfig {
            skip_underscore_names: false,
        });
        let violations = engine.evaluate(&facts, Dialect::CSharp);
        assert_eq!(ids(&violations), vec!["F001"]);

        let fine = vec![IdentifierFact::new("Field", "_maxCount", 4)];
        assert!(engine.evaluate(&fine, Dialect::CSharp).is_empty());
    }

    #[test]
    fn test_underscore_skip_is_csharp_only() {
        let facts = vec![IdentifierFact::new("variable", "_x", 1)];
        assert_eq!(ids(&evaluate(&facts, Dialect::Vue)), vec!["VV001"]);
    }

    #[test]
    fn test_lifecycle_names_exempt_in_both_dialects() {
        let facts = vec![
            IdentifierFact::new("method", "mounted", 1).with_subtype("method"),
            IdentifierFact::new("method", "onMounted", 2).with_subtype("event_handler"),
        ];
        assert!(evaluate(&facts, Dialect::Vue).is_empty());
        // `mounted` would otherwise fail M001 and M002
        assert!(evaluate(&facts[..1], Dialect::CSharp).is_empty());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let engine = NamingEngine::default();
        let facts = csharp_facts();
        let first = engine.evaluate(&facts, Dialect::CSharp);
        let second = engine.evaluate(&facts, Dialect::CSharp);
        assert_eq!(first, second);

        let facts = vue_facts();
        assert_eq!(
            engine.evaluate(&facts, Dialect::Vue),
            engine.evaluate(&facts, Dialect::Vue)
        );
    }

    #[test]
    fn test_emitted_rules_are_catalogued() {
        for (dialect, facts) in [(Dialect::CSharp, csharp_facts()), (Dialect::Vue, vue_facts())] {
            for violation in evaluate(&facts, dialect) {
                assert!(
                    catalog::describe(dialect, &violation.rule_id).is_some(),
                    "{} missing from {dialect} catalog",
                    violation.rule_id
                );
            }
        }
    }

    #[test]
    fn test_failing_tagger_never_adds_verb_violations() {
        let engine = NamingEngine::default().with_tagger(Arc::new(FailingTagger));
        // fast path still accepts known verbs
        let facts = vec![IdentifierFact::new("Method", "GetUser", 1)];
        assert!(engine.evaluate(&facts, Dialect::CSharp).is_empty());

        // noun checks fail closed and report
        let facts = vec![IdentifierFact::new("Class", "Utils", 1)];
        let violations = engine.evaluate(&facts, Dialect::CSharp);
        assert_eq!(ids(&violations), vec!["C002"]);
        assert_eq!(violations[0].severity, Severity::Info);
    }

    #[test]
    fn test_utils_class_outcome() {
        let facts = vec![IdentifierFact::new("Class", "Utils", 1)];
        assert!(evaluate(&facts, Dialect::CSharp).is_empty());
    }

    #[test]
    fn test_duplicate_facts_are_evaluated_independently() {
        let fact = IdentifierFact::new("variable", "Q", 9);
        let violations = evaluate(&[fact.clone(), fact], Dialect::CSharp);
        assert_eq!(ids(&violations), vec!["V001", "V002", "V001", "V002"]);
    }
}
