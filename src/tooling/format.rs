//! Format tree listings, validation results, and build summaries as text.

use crate::site::SiteReport;
use crate::tree::{TreeIssue, WalkEntry};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

const DESCRIPTION_WIDTH: usize = 60;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn truncate(text: &str, width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= width {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Format the command tree as a table, one row per node.
pub fn format_tree_text(executable: &str, entries: &[WalkEntry<'_>]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("{} commands", executable))
    ));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Level", "Params", "Description"]);
    for entry in entries {
        table.add_row(vec![
            entry.path(),
            entry.level().as_str().to_string(),
            entry.node.parameters.len().to_string(),
            truncate(&entry.node.description, DESCRIPTION_WIDTH),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} commands.\n", entries.len()));
    out
}

/// Format validation issues.
pub fn format_issues_text(issues: &[TreeIssue]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Validation")));
    if issues.is_empty() {
        out.push_str("No issues found.\n");
        return out;
    }
    for issue in issues {
        out.push_str(&format!("  {}\n", issue));
    }
    out.push_str(&format!("\nTotal: {} issues.\n", issues.len()));
    out
}

pub fn format_site_report_text(report: &SiteReport) -> String {
    format!(
        "Built {} views ({} services, {} operations) into {}",
        report.views,
        report.services,
        report.operations,
        report.output_dir.display()
    )
}
