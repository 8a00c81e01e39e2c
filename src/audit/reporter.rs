//! Formatting and reporting for audit results

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::check::CheckStatus;
use super::runner::AuditReport;

/// Formats an audit report as a table followed by a summary
pub fn format_report(report: &AuditReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Invariant", "Status", "Duration", "Message"]);

    for entry in &report.entries {
        let result = &entry.result;
        builder.push_record([
            entry.name,
            &result.status.as_colored_str(),
            &format!("{:.2?}", result.duration),
            &result.message,
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format_summary(report));
    output
}

fn format_summary(report: &AuditReport) -> String {
    let mut summary = format!("\n{}\n", "Summary".bold().underline());
    summary.push_str(&format!("  Invariants checked: {}\n", report.total));
    summary.push_str(&format!("  {} Held: {}\n", "✓".green(), report.passed));

    if report.warned > 0 {
        summary.push_str(&format!("  {} Warned: {}\n", "⚠".yellow(), report.warned));
    }
    if report.failed > 0 {
        summary.push_str(&format!("  {} Violated: {}\n", "✗".red(), report.failed));
    }

    summary.push('\n');
    let overall = match (report.is_healthy(), report.has_warnings()) {
        (true, false) => "Overall: CONSISTENT".green().bold(),
        (true, true) => "Overall: CONSISTENT (with warnings)".yellow().bold(),
        (false, _) => "Overall: INVARIANTS VIOLATED".red().bold(),
    };
    summary.push_str(&format!("  {}\n", overall));

    summary
}

/// Prints an audit report to stdout
///
/// Details are only printed for checks that did not pass.
pub fn print_report(report: &AuditReport) {
    println!("{}", format_report(report));

    for entry in report.entries.iter().filter(|e| e.result.status != CheckStatus::Pass) {
        let Some(details) = &entry.result.details else {
            continue;
        };
        println!("\n{}", entry.name.bold());
        if let Some(description) = entry.description {
            println!("  expected: {}", description.italic());
        }
        println!("{details}");
    }
}
