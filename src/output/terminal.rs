//! Terminal rendering with comfy-table: summary line, classification counts,
//! then one table per view.

use std::fmt::Write;

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::report::BulletinReport;

pub fn format_report_table(report: &BulletinReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;
    let _ = writeln!(
        out,
        "{} [{}] - {} vulnerabilities",
        summary.title, summary.year_month, summary.total
    );
    let _ = writeln!(out);

    let mut counts = new_table(vec!["Classification", "Count"]);
    for entry in &report.counts.counts {
        counts.add_row(vec![entry.label.clone(), entry.count.to_string()]);
    }
    let _ = writeln!(out, "{counts}");
    let _ = writeln!(out);

    for view in &report.views {
        let _ = writeln!(out, "{} ({})", view.name, view.records.len());
        if view.records.is_empty() {
            let _ = writeln!(out);
            continue;
        }
        let mut table = new_table(vec!["CVE ID", "Score", "Severity", "Exploited", "Title"]);
        for record in &view.records {
            table.add_row(vec![
                record.id.clone(),
                format!("{:.1}", record.score),
                record.severity.to_string(),
                if record.is_exploited { "Yes" } else { "No" }.to_string(),
                record.title.clone(),
            ]);
        }
        let _ = writeln!(out, "{table}");
        let _ = writeln!(out);
    }
    out
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriageConfig;
    use crate::report::build_report;

    #[test]
    fn renders_summary_and_every_view_heading() {
        let report = build_report("August 2025", "2025-Aug", &[], &TriageConfig::default());
        let text = format_report_table(&report);
        assert!(text.contains("August 2025 [2025-Aug] - 0 vulnerabilities"));
        assert!(text.contains("Patch Now (0)"));
        assert!(text.contains("Patch Later (0)"));
        assert!(text.contains("Classification"));
    }
}
