//! CLI Argument Structures
//!
//! This module contains all CLI argument definitions, command structures,
//! and value enums used by the codenamer binary.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use codenamer_rs::{Dialect, Severity};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Naming-convention analysis for C# and Vue
#[derive(Parser)]
#[command(name = "codenamer")]
#[command(version = VERSION)]
#[command(about = "🏷️  Codenamer - Naming-convention analysis for C# and Vue")]
#[command(long_about = "
Check identifier names in C# sources and Vue single-file components against
casing and part-of-speech conventions.

Common Usage:

  # Analyze every .cs and .vue file under a directory
  codenamer analyze --directory ./src

  # Analyze specific files, warnings only, as JSON
  codenamer analyze -f Orders.cs -f Cart.vue --severity warning --output json

  # Skip generated files
  codenamer analyze -d ./src --exclude-pattern '*.Designer.cs'

  # Show the facts mined from a component
  codenamer mine ./src/components/Cart.vue

  # List the rule catalog
  codenamer list-rules --dialect vue
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze C# and Vue files for naming issues
    Analyze(Box<AnalyzeArgs>),

    /// Print the identifier facts extracted from one file as JSON
    Mine(MineArgs),

    /// List the naming rules of each dialect
    ListRules(ListRulesArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["files", "directory"])))]
pub struct AnalyzeArgs {
    /// Source file to analyze (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory searched recursively for .cs and .vue files
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Glob matched against file names to skip during directory discovery (repeatable)
    #[arg(long = "exclude-pattern", value_name = "GLOB")]
    pub exclude_patterns: Vec<String>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "console")]
    pub output: OutputFormat,

    /// Minimum severity to report (defaults to analysis.min_severity from config)
    #[arg(short, long, value_enum)]
    pub severity: Option<SeverityArg>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// C# parser helper executable (overrides parser.executable)
    #[arg(long, value_name = "EXE")]
    pub parser: Option<PathBuf>,
}

#[derive(Args)]
pub struct MineArgs {
    /// A .vue or .cs file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// C# parser helper executable (overrides parser.executable)
    #[arg(long, value_name = "EXE")]
    pub parser: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListRulesArgs {
    /// Only list rules for this dialect
    #[arg(short, long, value_enum)]
    pub dialect: Option<DialectArg>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".codenamer.yml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(value_name = "FILE")]
    pub config: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable coloured report
    Console,
    /// JSON report on stdout
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    Info,
    Warning,
    Error,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Info => Severity::Info,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Error => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    Csharp,
    Vue,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Csharp => Dialect::CSharp,
            DialectArg::Vue => Dialect::Vue,
        }
    }
}
