use patchmap::config::TriageConfig;
use patchmap::feed::FeedDocument;
use patchmap::normalize::normalize_all;
use patchmap::report::{build_report, detail, select_by_ids, ViewName};
use pretty_assertions::assert_eq;

fn monthly_feed() -> FeedDocument {
    let document = serde_json::json!({
        "DocumentTitle": {"Value": "August 2025 Security Updates"},
        "Vulnerability": [
            {
                "CVE": "CVE-2025-0001",
                "Title": {"Value": "Windows Kernel Remote Code Execution"},
                "CVSSScoreSets": [
                    {"BaseScore": 7.1, "Vector": "CVSS:3.1/AV:L"},
                    {"BaseScore": 9.5, "Vector": "CVSS:3.1/AV:N"}
                ],
                "Threats": [
                    {"Type": 0, "Description": {"Value": "Remote Code Execution"}},
                    {"Type": 1, "Description": {"Value": "Exploited:Yes;Publicly Disclosed:No"}}
                ],
                "Notes": [
                    {"Title": "Description", "Value": "Kernel memory corruption."}
                ],
                "Remediations": [{"URL": "https://example.test/kb0001"}],
                "ProductStatuses": [{"ProductID": ["Windows 11"]}]
            },
            {
                "CVE": "CVE-2025-0002",
                "Title": {"Value": "Office Macro Elevation of Privilege"},
                "CVSSScoreSets": [{"BaseScore": 9.1, "Vector": "CVSS:3.1/AV:N"}],
                "Threats": [
                    {"Type": 0, "Description": {"Value": "Elevation of Privilege"}}
                ],
                "Notes": [
                    {"Title": "Description", "Value": "Macro sandbox escape."}
                ],
                "Remediations": [{"URL": "https://example.test/kb0002"}],
                "ProductStatuses": [{"ProductID": ["Office 365"]}]
            },
            {
                "CVE": "CVE-2025-0003",
                "Title": {"Value": "Browser Spoofing"},
                "CVSSScoreSets": [{"BaseScore": 4.3, "Vector": "CVSS:3.1/AV:N"}],
                "Threats": [
                    {"Type": 0, "Description": {"Value": "Edge - Chromium"}, "ProductID": ["11655"]},
                    {"Type": 1, "Description": {"Value": "Exploitation More Likely"}}
                ],
                "ProductStatuses": [{"ProductID": ["11655"]}]
            }
        ]
    });
    serde_json::from_value(document).unwrap()
}

#[test]
fn monthly_report_end_to_end() {
    let config = TriageConfig::default();
    let feed = monthly_feed();
    let records = normalize_all(&feed, &config);
    let report = build_report(feed.title(), "2025-Aug", &records, &config);

    assert_eq!(report.summary.title, "August 2025 Security Updates");
    assert_eq!(report.summary.total, 3);

    let ids = |name: ViewName| -> Vec<String> {
        report
            .view(name)
            .unwrap()
            .records
            .iter()
            .map(|r| r.id.clone())
            .collect()
    };

    // Sorted by descending score.
    assert_eq!(
        ids(ViewName::All),
        vec!["CVE-2025-0001", "CVE-2025-0002", "CVE-2025-0003"]
    );
    assert_eq!(
        ids(ViewName::Critical),
        vec!["CVE-2025-0001", "CVE-2025-0002"]
    );
    assert_eq!(ids(ViewName::Exploited), vec!["CVE-2025-0001"]);
    assert_eq!(ids(ViewName::LikelyExploited), vec!["CVE-2025-0003"]);
    assert_eq!(
        ids(ViewName::HighSeverity),
        vec!["CVE-2025-0001", "CVE-2025-0002"]
    );

    // The Windows item is critical and exploited but stays out of PatchNow.
    assert_eq!(ids(ViewName::PatchNow), vec!["CVE-2025-0002"]);
    assert_eq!(
        ids(ViewName::PatchLater),
        vec!["CVE-2025-0001", "CVE-2025-0003"]
    );

    assert_eq!(report.counts.get("Remote Code Execution"), Some(1));
    assert_eq!(report.counts.get("Elevation of Privilege"), Some(1));
    assert_eq!(report.counts.get("Edge - Chromium"), Some(1));
    assert_eq!(report.counts.get("Denial of Service"), Some(0));
}

#[test]
fn detail_and_selection_read_the_same_records() {
    let config = TriageConfig::default();
    let records = normalize_all(&monthly_feed(), &config);

    let found = detail(&records, "CVE-2025-0002").unwrap();
    assert_eq!(found.score, 9.1);
    assert_eq!(found.remediation_url, "https://example.test/kb0002");
    assert!(detail(&records, "CVE-2025-9999").is_none());

    // Selection keeps record order, not the caller's id order.
    let chosen = select_by_ids(
        &records,
        &["CVE-2025-0003".to_string(), "CVE-2025-0001".to_string()],
    );
    let ids: Vec<&str> = chosen.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["CVE-2025-0001", "CVE-2025-0003"]);
}

#[test]
fn malformed_entries_do_not_abort_the_batch() {
    let config = TriageConfig::default();
    let feed: FeedDocument = serde_json::from_value(serde_json::json!({
        "Vulnerability": [
            {},
            {"CVE": "CVE-2025-0500", "CVSSScoreSets": [{"BaseScore": "oops"}]},
            {"CVE": "CVE-2025-0501", "CVSSScoreSets": null, "Threats": null}
        ]
    }))
    .unwrap();
    let records = normalize_all(&feed, &config);
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.score == 0.0));

    let report = build_report("", "2025-Aug", &records, &config);
    assert!(report.view(ViewName::Critical).unwrap().records.is_empty());
    assert_eq!(report.view(ViewName::NeedsPatch).unwrap().records.len(), 3);
}

#[test]
fn empty_document_yields_empty_views() {
    let config = TriageConfig::default();
    let feed = FeedDocument::from_json("{}").unwrap();
    let records = normalize_all(&feed, &config);
    let report = build_report(feed.title(), "2025-Aug", &records, &config);
    assert_eq!(report.summary.total, 0);
    assert!(report.views.iter().all(|view| view.records.is_empty()));
}
