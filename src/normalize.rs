//! The normalization boundary.
//!
//! `normalize` is the single place where the raw entry's optional, nested
//! shape collapses into a flat typed record with defaults applied. It is total
//! over any entry the document parser accepted: missing fields degrade to
//! empty values, never to an error, so one malformed entry cannot abort a
//! batch.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::classify;
use crate::config::TriageConfig;
use crate::extract::{
    best_score_and_vector, exploit_flags, first_remediation_url, flatten_impacted_products,
    note_value, residual_notes, severity_band, SeverityBand,
};
use crate::feed::{FeedDocument, RawVulnerability};

/// Flat, decision-ready view of one vulnerability entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedVulnerability {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: f64,
    pub vector: String,
    pub severity: SeverityBand,
    pub is_critical: bool,
    pub is_exploited: bool,
    pub is_publicly_disclosed: bool,
    pub is_likely_exploited: bool,
    pub classification_labels: BTreeSet<String>,
    pub impacted_products: Vec<String>,
    pub remediation_url: String,
    pub exploitability_assessment: String,
    pub residual_notes: String,
}

impl NormalizedVulnerability {
    /// Joined product list as shown in reports and matched by the patch-now
    /// exclusion policy.
    pub fn impacted_products_display(&self) -> String {
        self.impacted_products.join("; ")
    }
}

/// Normalize one raw entry. Pure; does not touch the raw entry again after
/// returning.
pub fn normalize(entry: &RawVulnerability, config: &TriageConfig) -> NormalizedVulnerability {
    let (score, vector) = best_score_and_vector(entry);
    let severity = severity_band(score, &config.severity);
    let flags = exploit_flags(entry);
    NormalizedVulnerability {
        id: entry.id().to_string(),
        title: entry.title_text().to_string(),
        description: note_value(entry, "description"),
        score,
        vector,
        severity,
        is_critical: severity == SeverityBand::Critical,
        is_exploited: flags.exploited,
        is_publicly_disclosed: flags.publicly_disclosed,
        is_likely_exploited: flags.likely_exploited,
        classification_labels: classify::classify(entry, &config.classifier),
        impacted_products: flatten_impacted_products(entry),
        remediation_url: first_remediation_url(entry),
        exploitability_assessment: note_value(entry, "exploitabilityassessment"),
        residual_notes: residual_notes(entry),
    }
}

/// Normalize a whole document in source order.
pub fn normalize_all(
    document: &FeedDocument,
    config: &TriageConfig,
) -> Vec<NormalizedVulnerability> {
    document
        .entries()
        .iter()
        .map(|entry| normalize(entry, config))
        .collect()
}
