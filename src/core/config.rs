//! Configuration types and management for codenamer-rs.
//!
//! Every section is optional in YAML; missing sections and fields take their
//! defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CodenamerError, Result};
use crate::detectors::names::config::{RulesConfig, Severity};
use crate::lang::vue::MinerConfig;

/// Main configuration for the codenamer engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodenamerConfig {
    /// Batch analysis settings
    pub analysis: AnalysisConfig,

    /// Rule evaluation switches
    pub rules: RulesConfig,

    /// External C# parser invocation
    pub parser: ParserConfig,

    /// Vue script miner limits
    pub miner: MinerConfig,

    /// Part-of-speech tagger data
    pub pos: PosConfig,

    /// Directory discovery
    pub discovery: DiscoveryConfig,
}

impl CodenamerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            CodenamerError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            CodenamerError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        self.parser.validate()?;

        if self.miner.max_script_bytes == 0 {
            return Err(CodenamerError::config_field(
                "max_script_bytes must be greater than 0",
                "miner.max_script_bytes",
            ));
        }

        self.discovery.validate()?;
        Ok(())
    }
}

/// Batch analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Violations below this severity are dropped from reports
    pub min_severity: Severity,

    /// Files analysed concurrently
    pub max_concurrent_files: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            max_concurrent_files: 8,
        }
    }
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_files == 0 {
            return Err(CodenamerError::config_field(
                "max_concurrent_files must be greater than 0",
                "analysis.max_concurrent_files",
            ));
        }
        Ok(())
    }
}

/// External C# parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Helper executable invoked as `<executable> <source>`
    pub executable: PathBuf,

    /// Per-file time limit in seconds
    pub timeout_secs: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(
                "csharp-parser-helper/bin/Debug/net8.0/CSharpParserHelper",
            ),
            timeout_secs: 30,
        }
    }
}

impl ParserConfig {
    /// Time limit as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate parser configuration
    pub fn validate(&self) -> Result<()> {
        if self.executable.as_os_str().is_empty() {
            return Err(CodenamerError::config_field(
                "executable must not be empty",
                "parser.executable",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(CodenamerError::config_field(
                "timeout_secs must be greater than 0",
                "parser.timeout_secs",
            ));
        }
        Ok(())
    }
}

/// Part-of-speech tagger configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosConfig {
    /// Lexicon replacing the embedded one (`word<TAB>TAG:count ...` lines)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon_path: Option<PathBuf>,
}

/// File discovery configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Glob patterns matched against file names (e.g. `*.Designer.cs`)
    pub exclude_patterns: Vec<String>,
}

impl DiscoveryConfig {
    /// Validate discovery configuration
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.exclude_patterns {
            globset::Glob::new(pattern).map_err(|e| {
                CodenamerError::config_field(
                    format!("Invalid exclude pattern '{pattern}': {e}"),
                    "discovery.exclude_patterns",
                )
            })?;
        }
        Ok(())
    }
}
