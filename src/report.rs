//! Report assembly: named views over the normalized record set, the
//! patch-now/patch-later partition, and point lookups for the detail and
//! export surfaces. All surfaces read the same normalized records, so the
//! interactive and batch outputs cannot drift.

use serde::Serialize;

use crate::classify::{self, ClassificationCounts};
use crate::config::TriageConfig;
use crate::normalize::NormalizedVulnerability;

/// NVD cross-reference link for an identifier. Pure derivation, never fetched.
pub fn nvd_link(id: &str) -> String {
    format!("https://nvd.nist.gov/vuln/detail/{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewName {
    All,
    Critical,
    Exploited,
    LikelyExploited,
    HighSeverity,
    NeedsPatch,
    PatchNow,
    PatchLater,
}

impl ViewName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::All => "All",
            ViewName::Critical => "Critical",
            ViewName::Exploited => "Exploited",
            ViewName::LikelyExploited => "Likely Exploited",
            ViewName::HighSeverity => "High Severity",
            ViewName::NeedsPatch => "Needs Patch",
            ViewName::PatchNow => "Patch Now",
            ViewName::PatchLater => "Patch Later",
        }
    }
}

impl std::fmt::Display for ViewName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, ordered slice of the normalized record set.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub name: ViewName,
    pub records: Vec<NormalizedVulnerability>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub title: String,
    pub year_month: String,
    pub total: usize,
}

/// Everything the presentation adapters consume.
#[derive(Debug, Clone, Serialize)]
pub struct BulletinReport {
    pub summary: ReportSummary,
    pub counts: ClassificationCounts,
    pub views: Vec<ReportView>,
}

impl BulletinReport {
    pub fn view(&self, name: ViewName) -> Option<&ReportView> {
        self.views.iter().find(|view| view.name == name)
    }
}

/// Descending score; stable, so equal scores keep input order.
fn sorted_by_score_desc(records: &[NormalizedVulnerability]) -> Vec<NormalizedVulnerability> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted
}

fn patch_now_applies(record: &NormalizedVulnerability, config: &TriageConfig) -> bool {
    let urgent = record.is_critical || record.is_exploited;
    if !urgent {
        return false;
    }
    let exclusion = &config.report.patch_now_exclusion;
    exclusion.is_empty() || !record.impacted_products_display().contains(exclusion.as_str())
}

/// Build every named view. `NeedsPatch` keeps input order and is partitioned
/// exactly into `PatchNow` and `PatchLater`: a record lands in `PatchNow` when
/// it is critical or actively exploited and its product list does not hit the
/// configured exclusion, in `PatchLater` otherwise.
pub fn build_views(records: &[NormalizedVulnerability], config: &TriageConfig) -> Vec<ReportView> {
    let sorted = sorted_by_score_desc(records);
    let filtered = |predicate: &dyn Fn(&NormalizedVulnerability) -> bool| {
        sorted
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect::<Vec<_>>()
    };

    let (patch_now, patch_later): (Vec<_>, Vec<_>) = records
        .iter()
        .cloned()
        .partition(|record| patch_now_applies(record, config));

    vec![
        ReportView {
            name: ViewName::All,
            records: sorted.clone(),
        },
        ReportView {
            name: ViewName::Critical,
            records: filtered(&|r| r.is_critical),
        },
        ReportView {
            name: ViewName::Exploited,
            records: filtered(&|r| r.is_exploited),
        },
        ReportView {
            name: ViewName::LikelyExploited,
            records: filtered(&|r| r.is_likely_exploited),
        },
        ReportView {
            name: ViewName::HighSeverity,
            records: filtered(&|r| r.score >= config.report.high_severity_threshold),
        },
        ReportView {
            name: ViewName::NeedsPatch,
            records: records.to_vec(),
        },
        ReportView {
            name: ViewName::PatchNow,
            records: patch_now,
        },
        ReportView {
            name: ViewName::PatchLater,
            records: patch_later,
        },
    ]
}

/// Assemble the full report for one month.
pub fn build_report(
    title: &str,
    year_month: &str,
    records: &[NormalizedVulnerability],
    config: &TriageConfig,
) -> BulletinReport {
    BulletinReport {
        summary: ReportSummary {
            title: title.to_string(),
            year_month: year_month.to_string(),
            total: records.len(),
        },
        counts: classify::aggregate_counts(records, &config.classifier),
        views: build_views(records, config),
    }
}

/// Point lookup by identifier; `None` is the not-found signal.
pub fn detail<'a>(
    records: &'a [NormalizedVulnerability],
    id: &str,
) -> Option<&'a NormalizedVulnerability> {
    records.iter().find(|record| record.id == id)
}

/// Filter to a caller-supplied id set, preserving record order rather than the
/// caller's id order. An empty selection yields an empty sequence, not an
/// error.
pub fn select_by_ids(
    records: &[NormalizedVulnerability],
    ids: &[String],
) -> Vec<NormalizedVulnerability> {
    records
        .iter()
        .filter(|record| ids.iter().any(|id| *id == record.id))
        .cloned()
        .collect()
}
