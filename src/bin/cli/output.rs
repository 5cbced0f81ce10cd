//! Output Formatting and Display Functions
//!
//! Console rendering of analysis reports, JSON serialization and the rule
//! catalog table.

use codenamer_rs::detectors::names::catalog;
use codenamer_rs::{AnalysisReport, Dialect, FileReport, Severity, Violation};
use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

/// Print the console form of `report`
pub fn print_console_report(report: &AnalysisReport) {
    println!("{}", render_console_report(report));
}

/// Print `report` as pretty JSON
pub fn print_json_report(report: &AnalysisReport) -> anyhow::Result<()> {
    println!("{}", render_json_report(report)?);
    Ok(())
}

/// Render the summary block followed by one section per file
pub fn render_console_report(report: &AnalysisReport) -> String {
    let mut lines = vec![
        format!("{}", "📊 Naming Analysis Summary".bright_blue().bold()),
        format!("   Total files: {}", report.summary.total_files),
        format!("   Total issues: {}", report.summary.total_issues),
        format!("   Files with issues: {}", report.summary.files_with_issues),
    ];

    let (info, warning, error) = report.severity_counts();
    if report.has_issues() {
        lines.push(format!(
            "   {}",
            format!("({info} info, {warning} warning, {error} error)").dimmed()
        ));
    }

    for file in &report.files {
        lines.push(String::new());
        lines.extend(render_file(file));
    }

    lines.join("\n")
}

fn render_file(file: &FileReport) -> Vec<String> {
    let mut lines = vec![format!("{} {}", "📄", file.file.bold())];

    if let Some(error) = &file.error {
        lines.push(format!("   {} {}", "❌ Error:".red().bold(), error));
        return lines;
    }

    if !file.parser_errors.is_empty() {
        lines.push(format!("   {}", "⚠️  Parser errors:".yellow()));
        for err in &file.parser_errors {
            lines.push(format!("      line {}: {}", err.line, err.message));
        }
    }

    if file.results.is_empty() {
        lines.push(format!("   {}", "✅ No naming issues".green()));
    } else {
        lines.extend(file.results.iter().map(render_violation));
    }

    lines
}

fn render_violation(violation: &Violation) -> String {
    let location = format!("line {:>4}", violation.line);
    let rule = format!("[{}]", violation.rule_id);
    let rule = match violation.severity {
        Severity::Info => rule.cyan().to_string(),
        Severity::Warning => rule.yellow().to_string(),
        Severity::Error => rule.red().bold().to_string(),
    };

    format!(
        "   {} {} {} {}: {}",
        severity_icon(violation.severity),
        location.dimmed(),
        rule,
        violation.name.bold(),
        violation.message
    )
}

/// Icon shown in front of a violation
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ️ ",
        Severity::Warning => "⚠️ ",
        Severity::Error => "❌",
    }
}

/// Pretty JSON of the `{summary, files}` report
pub fn render_json_report(report: &AnalysisReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Row for the rule catalog table.
#[derive(Tabled)]
struct RuleRow {
    dialect: &'static str,
    rule: &'static str,
    description: &'static str,
}

/// Render the rule catalog for `dialects` as a rounded table
pub fn render_rule_table(dialects: &[Dialect]) -> String {
    let rows: Vec<RuleRow> = dialects
        .iter()
        .flat_map(|&dialect| {
            catalog::rules(dialect).iter().map(move |(id, description)| RuleRow {
                dialect: dialect.display_name(),
                rule: *id,
                description: *description,
            })
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    table.to_string()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
