//! # Codenamer-RS: Naming-Convention Analysis for C# and Vue
//!
//! This library checks identifier names against casing and part-of-speech
//! conventions for two source dialects:
//!
//! - **C#**: identifier facts come from an external Roslyn-based helper
//! - **Vue single-file components**: identifier facts are mined lexically
//!   from the `<script>` block
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        API Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Core          │  Detectors          │  Language            │
//! │                │                     │                      │
//! │ • Casing       │ • Rule engine       │ • Vue miner          │
//! │ • Config       │ • POS heuristics    │ • C# helper boundary │
//! │ • Errors       │ • Rule catalog      │                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use codenamer_rs::{CodenamerConfig, CodenamerEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = CodenamerEngine::new(CodenamerConfig::default())?;
//!     let report = engine.analyze_directory(std::path::Path::new("./src")).await?;
//!
//!     println!("{} issues in {} files", report.summary.total_issues, report.summary.total_files);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "mimalloc")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

// Core building blocks
pub mod core {
    //! Casing predicates, configuration and error types.

    pub mod casing;
    pub mod config;
    pub mod errors;
}

// Naming rules
pub mod detectors {
    //! Naming-convention detectors.

    pub mod names;
}

// Dialect fact producers
pub mod lang {
    //! Identifier fact producers per dialect.

    pub mod csharp;
    pub mod vue;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::{discover_files, CodenamerEngine};
pub use api::results::{AnalysisReport, AnalysisSummary, FileReport};
pub use core::config::CodenamerConfig;
pub use core::errors::{CodenamerError, Result};
pub use detectors::names::{
    evaluate, filter_by_severity, Dialect, IdentifierFact, NamingEngine, Severity,
    StructuralError, Violation,
};
pub use lang::vue::{mine, MinedScript};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
