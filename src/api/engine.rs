//! Main analysis engine implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::api::results::{AnalysisReport, FileReport};
use crate::core::config::CodenamerConfig;
use crate::core::errors::{CodenamerError, Result};
use crate::detectors::names::config::Dialect;
use crate::detectors::names::engine::NamingEngine;
use crate::detectors::names::pos::load_tagger;
use crate::lang::csharp::ExternalParser;
use crate::lang::vue::VueMiner;

/// Main codenamer analysis engine
///
/// Files are analysed independently; a failure in one file is recorded in
/// its report and never aborts the batch.
#[derive(Debug, Clone)]
pub struct CodenamerEngine {
    config: Arc<CodenamerConfig>,
    rules: NamingEngine,
    miner: VueMiner,
    parser: ExternalParser,
}

impl CodenamerEngine {
    /// Create a new engine after validating `config`
    pub fn new(config: CodenamerConfig) -> Result<Self> {
        config.validate()?;

        let tagger = load_tagger(config.pos.lexicon_path.as_deref());
        let rules = NamingEngine::new(config.rules.clone()).with_tagger(tagger);
        let miner = VueMiner::new(config.miner.clone());
        let parser = ExternalParser::new(config.parser.executable.clone(), config.parser.timeout());

        Ok(Self {
            config: Arc::new(config),
            rules,
            miner,
            parser,
        })
    }

    /// Engine configuration
    pub fn config(&self) -> &CodenamerConfig {
        &self.config
    }

    /// Analyse in-memory source text labelled `label`
    pub async fn analyze_source(&self, dialect: Dialect, source: &str, label: &str) -> FileReport {
        match dialect {
            Dialect::Vue => {
                let mined = self.miner.mine(source);
                let violations = self.rules.evaluate(&mined.names, Dialect::Vue);
                FileReport::analyzed(label, violations, mined.errors)
            }
            Dialect::CSharp => match self.parser.parse(source).await {
                Ok(sheet) => {
                    let violations = self.rules.evaluate(&sheet.names, Dialect::CSharp);
                    FileReport::analyzed(label, violations, sheet.errors)
                }
                Err(e) => {
                    warn!("C# parsing failed for {label}: {e}");
                    FileReport::failed(label, e.to_string())
                }
            },
        }
    }

    /// Read and analyse one file; the dialect follows its extension
    pub async fn analyze_file(&self, path: &Path) -> FileReport {
        let label = path.display().to_string();
        debug!("Analyzing {label}");

        let Some(dialect) = Dialect::from_path(path) else {
            return FileReport::failed(label, "Unsupported file type (expected .cs or .vue)");
        };

        match tokio::fs::read_to_string(path).await {
            Ok(source) => self.analyze_source(dialect, &source, &label).await,
            Err(e) => {
                let err = CodenamerError::io(format!("Failed to read {label}"), e);
                FileReport::failed(label, err.to_string())
            }
        }
    }

    /// Analyse files concurrently; reports keep the input order
    pub async fn analyze_paths(&self, paths: &[PathBuf]) -> AnalysisReport {
        info!("Starting analysis of {} files", paths.len());

        let files: Vec<FileReport> = stream::iter(paths)
            .map(|path| self.analyze_file(path))
            .buffered(self.config.analysis.max_concurrent_files)
            .collect()
            .await;

        let report = AnalysisReport::from_files(files);
        info!(
            "Analysis completed: {} files, {} issues",
            report.summary.total_files, report.summary.total_issues
        );
        report
    }

    /// Discover supported files under `root` and analyse them
    pub async fn analyze_directory(&self, root: &Path) -> Result<AnalysisReport> {
        let files = discover_files(root, &self.config.discovery.exclude_patterns)?;
        Ok(self.analyze_paths(&files).await)
    }
}

/// Recursively list `.cs` and `.vue` files under `root`, sorted by path.
///
/// Exclusion globs match the file name only.
pub fn discover_files(root: &Path, exclude_patterns: &[String]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(CodenamerError::io(
            format!("Path does not exist: {}", root.display()),
            std::io::Error::new(std::io::ErrorKind::NotFound, "Path not found"),
        ));
    }
    if !root.is_dir() {
        return Err(CodenamerError::validation(format!(
            "Path is not a directory: {}",
            root.display()
        )));
    }

    let excludes = build_exclude_globset(exclude_patterns)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            CodenamerError::io(
                format!("Failed to walk {}", root.display()),
                std::io::Error::from(e),
            )
        })?;

        if !entry.file_type().is_file() || Dialect::from_path(entry.path()).is_none() {
            continue;
        }
        if excludes.is_match(entry.file_name()) {
            debug!("Excluded {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }

    debug!("Discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

fn build_exclude_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            CodenamerError::config_field(
                format!("Invalid exclude pattern '{pattern}': {e}"),
                "discovery.exclude_patterns",
            )
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| CodenamerError::config(format!("Failed to build exclude patterns: {e}")))
}
