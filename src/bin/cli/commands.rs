//! Command Execution Logic
//!
//! This module contains the execution functions for every codenamer
//! subcommand plus configuration loading shared between them.

use std::path::{Path, PathBuf};

use anyhow::Context;
use codenamer_rs::lang::csharp::ExternalParser;
use codenamer_rs::lang::vue::VueMiner;
use codenamer_rs::{discover_files, CodenamerConfig, CodenamerEngine, Dialect, Severity};
use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};
use tracing::{debug, info};

use crate::cli::args::{
    AnalyzeArgs, InitConfigArgs, ListRulesArgs, MineArgs, OutputFormat, ValidateConfigArgs,
};
use crate::cli::output::{print_console_report, print_json_report, render_rule_table};

/// Run naming analysis over the selected files; exits 1 when issues remain
pub async fn analyze_command(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = load_configuration(args.config.as_deref()).await?;
    if let Some(parser) = args.parser {
        config.parser.executable = parser;
    }
    config
        .discovery
        .exclude_patterns
        .extend(args.exclude_patterns.iter().cloned());

    let min_severity: Severity = args
        .severity
        .map(Into::into)
        .unwrap_or(config.analysis.min_severity);

    let engine = CodenamerEngine::new(config)?;

    let files = if let Some(directory) = &args.directory {
        match discover_files(directory, &engine.config().discovery.exclude_patterns) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("{} {}", "❌ Cannot analyze directory:".red(), e);
                std::process::exit(1);
            }
        }
    } else {
        select_files(&args.files)
    };

    if files.is_empty() {
        eprintln!("{}", "❌ No .cs or .vue files to analyze".red());
        std::process::exit(1);
    }

    info!("Found {} files to analyze", files.len());
    debug!("Minimum severity: {}", min_severity);

    let report = engine.analyze_paths(&files).await.filtered(min_severity);

    match args.output {
        OutputFormat::Console => print_console_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
    }

    if report.has_issues() {
        std::process::exit(1);
    }

    Ok(())
}

/// Keep explicitly named files that exist and have a supported extension
fn select_files(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|path| {
            let usable = path.is_file() && Dialect::from_path(path).is_some();
            if !usable {
                eprintln!(
                    "{} {}",
                    "⚠️  Skipping invalid file:".yellow(),
                    path.display()
                );
            }
            usable
        })
        .cloned()
        .collect()
}

/// Print the identifier facts of one file as JSON
pub async fn mine_command(args: MineArgs) -> anyhow::Result<()> {
    let mut config = load_configuration(args.config.as_deref()).await?;
    if let Some(parser) = args.parser {
        config.parser.executable = parser;
    }

    let Some(dialect) = Dialect::from_path(&args.file) else {
        anyhow::bail!(
            "Unsupported file type (expected .cs or .vue): {}",
            args.file.display()
        );
    };

    let source = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let json = match dialect {
        Dialect::Vue => {
            let mined = VueMiner::new(config.miner).mine(&source);
            serde_json::to_string_pretty(&mined)?
        }
        Dialect::CSharp => {
            let timeout = config.parser.timeout();
            let parser = ExternalParser::new(config.parser.executable, timeout);
            let sheet = parser.parse(&source).await?;
            serde_json::to_string_pretty(&sheet)?
        }
    };

    println!("{}", json);
    Ok(())
}

/// List the rule catalog
pub async fn list_rules(args: ListRulesArgs) -> anyhow::Result<()> {
    let dialects: Vec<Dialect> = match args.dialect {
        Some(dialect) => vec![dialect.into()],
        None => Dialect::ALL.to_vec(),
    };

    println!("{}", "🏷️  Naming Rules".bright_blue().bold());
    println!();
    println!("{}", render_rule_table(&dialects));
    println!();
    println!(
        "{}",
        "💡 Tip: Use --severity warning to hide style suggestions".dimmed()
    );

    Ok(())
}

/// Print default configuration
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default codenamer configuration".dimmed());
    println!("{}", "# Save this to a file and customize as needed".dimmed());
    println!(
        "{}",
        "# Usage: codenamer analyze --config your-config.yml --directory ./src".dimmed()
    );
    println!();

    let config = CodenamerConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        eprintln!(
            "{} {}",
            "❌ Configuration file already exists:".red(),
            args.output.display()
        );
        eprintln!("   Use --force to overwrite or choose a different name with --output");
        std::process::exit(1);
    }

    CodenamerConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Point parser.executable at your C# parser helper build");
    println!(
        "   2. Run analysis with: {}",
        format!(
            "codenamer analyze --config {} --directory <dir>",
            args.output.display()
        )
        .cyan()
    );

    println!();
    println!("{}", "🔧 Key settings you can customize:".bright_blue().bold());

    #[derive(Tabled)]
    struct CustomizationRow {
        setting: &'static str,
        description: &'static str,
    }

    let customization_rows = vec![
        CustomizationRow {
            setting: "analysis.min_severity",
            description: "Lowest severity included in reports",
        },
        CustomizationRow {
            setting: "rules.skip_underscore_names",
            description: "Ignore C# identifiers starting with '_'",
        },
        CustomizationRow {
            setting: "parser.executable",
            description: "Roslyn helper producing C# identifier facts",
        },
        CustomizationRow {
            setting: "discovery.exclude_patterns",
            description: "File-name globs skipped during directory scans",
        },
    ];

    let mut table = Table::new(customization_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate a configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(&args.config)).await {
        Ok(config) => {
            println!("{}", "✅ Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {:#}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Severities are info, warning or error");
            println!("   • Counts and timeouts must be greater than 0");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'codenamer print-default-config' to see valid format".dimmed()
            );
            std::process::exit(1);
        }
    };

    display_config_summary(&config);

    if !config.parser.executable.exists() {
        println!();
        println!("{}", "💡 Recommendations:".bright_blue().bold());
        println!(
            "   ⚠️  parser.executable {} does not exist yet; C# files will fail to analyze",
            config.parser.executable.display()
        );
    }

    Ok(())
}

/// Print the effective settings as a table
pub fn display_config_summary(config: &CodenamerConfig) {
    #[derive(Tabled)]
    struct ConfigRow {
        setting: &'static str,
        value: String,
    }

    let exclude = if config.discovery.exclude_patterns.is_empty() {
        "(none)".to_string()
    } else {
        config.discovery.exclude_patterns.join(", ")
    };

    let config_rows = vec![
        ConfigRow {
            setting: "Minimum Severity",
            value: config.analysis.min_severity.to_string(),
        },
        ConfigRow {
            setting: "Concurrent Files",
            value: config.analysis.max_concurrent_files.to_string(),
        },
        ConfigRow {
            setting: "Skip '_' Names (C#)",
            value: config.rules.skip_underscore_names.to_string(),
        },
        ConfigRow {
            setting: "C# Parser",
            value: config.parser.executable.display().to_string(),
        },
        ConfigRow {
            setting: "Parser Timeout",
            value: format!("{}s", config.parser.timeout_secs),
        },
        ConfigRow {
            setting: "Max Script Size",
            value: format!("{} bytes", config.miner.max_script_bytes),
        },
        ConfigRow {
            setting: "POS Lexicon",
            value: config
                .pos
                .lexicon_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(embedded)".to_string()),
        },
        ConfigRow {
            setting: "Exclude Patterns",
            value: exclude,
        },
    ];

    let mut table = Table::new(config_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}

/// Load configuration from file or use defaults
pub async fn load_configuration(config_path: Option<&Path>) -> anyhow::Result<CodenamerConfig> {
    let config = match config_path {
        Some(path) => {
            let config = CodenamerConfig::from_yaml_file(path)
                .with_context(|| format!("Invalid configuration file {}", path.display()))?;
            config.validate()?;
            config
        }
        None => CodenamerConfig::default(),
    };

    Ok(config)
}
