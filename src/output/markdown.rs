//! Markdown rendering of the assembled report: summary header, the
//! classification-counts table, then one section per view.

use std::fmt::Write;

use crate::normalize::NormalizedVulnerability;
use crate::report::BulletinReport;

pub fn format_report_markdown(report: &BulletinReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;
    let _ = writeln!(out, "# {}", display_title(&summary.title, &summary.year_month));
    let _ = writeln!(out);
    let _ = writeln!(out, "Month: {}", summary.year_month);
    let _ = writeln!(out, "Total vulnerabilities: {}", summary.total);
    let _ = writeln!(out);

    let _ = writeln!(out, "## By Classification");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Classification | Count |");
    let _ = writeln!(out, "|---|---|");
    for entry in &report.counts.counts {
        let _ = writeln!(out, "| {} | {} |", entry.label, entry.count);
    }
    let _ = writeln!(out);

    for view in &report.views {
        let _ = writeln!(out, "## {} ({})", view.name, view.records.len());
        let _ = writeln!(out);
        if view.records.is_empty() {
            let _ = writeln!(out, "_none_");
            let _ = writeln!(out);
            continue;
        }
        let _ = writeln!(out, "| CVE ID | Score | Severity | Exploited | Title |");
        let _ = writeln!(out, "|---|---|---|---|---|");
        for record in &view.records {
            let _ = writeln!(out, "{}", record_row(record));
        }
        let _ = writeln!(out);
    }
    out
}

fn display_title(title: &str, year_month: &str) -> String {
    if title.is_empty() {
        format!("Security Bulletin {year_month}")
    } else {
        title.to_string()
    }
}

fn record_row(record: &NormalizedVulnerability) -> String {
    format!(
        "| {} | {:.1} | {} | {} | {} |",
        record.id,
        record.score,
        record.severity,
        if record.is_exploited { "Yes" } else { "No" },
        record.title.replace('|', "\\|"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriageConfig;
    use crate::normalize::normalize;
    use crate::report::build_report;

    #[test]
    fn renders_counts_and_one_section_per_view() {
        let record = normalize(
            &serde_json::from_value(serde_json::json!({
                "CVE": "CVE-2025-7",
                "Title": {"Value": "A | risky title"},
                "CVSSScoreSets": [{"BaseScore": 9.8}],
            }))
            .unwrap(),
            &TriageConfig::default(),
        );
        let report = build_report("August 2025", "2025-Aug", &[record], &TriageConfig::default());
        let md = format_report_markdown(&report);
        assert!(md.starts_with("# August 2025"));
        assert!(md.contains("| Elevation of Privilege | 0 |"));
        assert!(md.contains("## Patch Now"));
        assert!(md.contains("## Patch Later"));
        assert!(md.contains("A \\| risky title"));
    }

    #[test]
    fn empty_report_marks_views_as_none() {
        let report = build_report("", "2025-Aug", &[], &TriageConfig::default());
        let md = format_report_markdown(&report);
        assert!(md.starts_with("# Security Bulletin 2025-Aug"));
        assert!(md.contains("_none_"));
    }
}
