//! Analysis results and reporting structures.

use serde::{Deserialize, Serialize};

use crate::detectors::names::config::{filter_by_severity, Severity, StructuralError, Violation};

/// Outcome of analysing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path (or label) of the analysed source
    pub file: String,

    /// Set when the file could not be analysed at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Naming violations in evaluation order
    #[serde(default)]
    pub results: Vec<Violation>,

    /// Structural errors reported by the fact producer
    #[serde(default)]
    pub parser_errors: Vec<StructuralError>,

    /// Number of entries in `results`
    #[serde(default)]
    pub total_issues: usize,
}

impl FileReport {
    /// Report for a file that was analysed
    pub fn analyzed(
        file: impl Into<String>,
        results: Vec<Violation>,
        parser_errors: Vec<StructuralError>,
    ) -> Self {
        Self {
            file: file.into(),
            error: None,
            total_issues: results.len(),
            results,
            parser_errors,
        }
    }

    /// Report for a file whose analysis failed
    pub fn failed(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            error: Some(error.into()),
            results: Vec::new(),
            parser_errors: Vec::new(),
            total_issues: 0,
        }
    }

    /// Whether any violation was found
    pub fn has_issues(&self) -> bool {
        self.total_issues > 0
    }

    /// Copy keeping only violations at or above `min`
    pub fn filtered(&self, min: Severity) -> Self {
        let results = filter_by_severity(&self.results, min);
        Self {
            total_issues: results.len(),
            results,
            ..self.clone()
        }
    }
}

/// Aggregate counts over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Files in the batch, failed ones included
    pub total_files: usize,

    /// Violations across all files
    pub total_issues: usize,

    /// Files with at least one violation
    pub files_with_issues: usize,
}

impl AnalysisSummary {
    /// Compute counts from per-file reports
    pub fn from_files(files: &[FileReport]) -> Self {
        Self {
            total_files: files.len(),
            total_issues: files.iter().map(|f| f.total_issues).sum(),
            files_with_issues: files.iter().filter(|f| f.has_issues()).count(),
        }
    }
}

/// Batch analysis report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Aggregate counts
    pub summary: AnalysisSummary,

    /// Per-file reports in input order
    pub files: Vec<FileReport>,
}

impl AnalysisReport {
    /// Build a report, computing the summary
    pub fn from_files(files: Vec<FileReport>) -> Self {
        Self {
            summary: AnalysisSummary::from_files(&files),
            files,
        }
    }

    /// Apply the severity post-filter to every file and recompute counts
    pub fn filtered(&self, min: Severity) -> Self {
        Self::from_files(self.files.iter().map(|f| f.filtered(min)).collect())
    }

    /// Whether any file has a violation
    pub fn has_issues(&self) -> bool {
        self.summary.total_issues > 0
    }

    /// Files that could not be analysed
    pub fn failed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.error.is_some())
    }

    /// Violation counts as `(info, warning, error)`
    pub fn severity_counts(&self) -> (usize, usize, usize) {
        self.files
            .iter()
            .flat_map(|f| &f.results)
            .fold((0, 0, 0), |(i, w, e), v| match v.severity {
                Severity::Info => (i + 1, w, e),
                Severity::Warning => (i, w + 1, e),
                Severity::Error => (i, w, e + 1),
            })
    }
}
