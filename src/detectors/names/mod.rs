//! Rule-based naming analysis for C# and Vue identifiers.
//!
//! This module turns identifier facts into naming violations:
//! - Casing rules over PascalCase / camelCase conventions
//! - Part-of-speech heuristics (verb-first methods, noun-phrase types)
//! - Role-aware Vue rules for handlers, computed values and bindings
//! - A fixed rule catalog per dialect for help surfaces

pub mod catalog;
pub mod config;
pub mod csharp_rules;
pub mod engine;
pub mod pos;
pub mod role;
pub mod vue_rules;

// Re-export all public types and structs from config
pub use config::*;

// Re-export the engine entry points
pub use engine::{evaluate, NamingEngine};

pub use pos::{is_noun_phrase, load_tagger, starts_with_verb, PosTag, PosTagger, UnigramTagger};
pub use role::{classify_role, is_lifecycle_hook};
