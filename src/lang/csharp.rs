//! Boundary to the external C# fact producer.
//!
//! C# facts come from a Roslyn-based helper executable invoked as
//! `<executable> <source>`; it prints a single JSON object
//! `{"names": [...], "errors": [...]}` on stdout. Any failure of the helper is
//! fatal for that file and is never retried.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::debug;

use crate::core::errors::{CodenamerError, Result};
use crate::detectors::names::config::{IdentifierFact, StructuralError};

/// Facts and structural errors reported for one C# source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSheet {
    /// Declared identifiers
    #[serde(default)]
    pub names: Vec<IdentifierFact>,
    /// Syntax problems reported by the helper
    #[serde(default)]
    pub errors: Vec<StructuralError>,
}

impl FactSheet {
    /// Decode the helper's JSON output
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CodenamerError::Serialization {
            message: format!("C# parser returned malformed JSON: {e}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(e)),
        })
    }
}

/// Invokes the helper executable once per source
#[derive(Debug, Clone)]
pub struct ExternalParser {
    executable: PathBuf,
    timeout: Duration,
}

impl ExternalParser {
    /// Create a parser for `executable` with a per-call time limit
    pub fn new(executable: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            executable: executable.into(),
            timeout,
        }
    }

    /// Configured executable
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Configured time limit
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the helper on `source` and decode its facts.
    pub async fn parse(&self, source: &str) -> Result<FactSheet> {
        debug!(
            "Invoking C# parser {} ({} bytes)",
            self.executable.display(),
            source.len()
        );

        let child = Command::new(&self.executable)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CodenamerError::config_field(
                    format!("C# parser executable not found: {}", self.executable.display()),
                    "parser.executable",
                ),
                _ => CodenamerError::io(
                    format!("Failed to start C# parser {}", self.executable.display()),
                    e,
                ),
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| CodenamerError::timeout("C# parser", self.timeout))?
            .map_err(|e| CodenamerError::io("Failed to collect C# parser output", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CodenamerError::external_parser(
                if stderr.is_empty() {
                    format!("C# parser exited with {}", output.status)
                } else {
                    stderr
                },
                output.status.code(),
            ));
        }

        FactSheet::from_json(&String::from_utf8_lossy(&output.stdout))
    }
}
