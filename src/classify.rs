//! Threat classification.
//!
//! Classification-kind threat notices carry one of a fixed label set. Labels
//! are set-valued per record, so a label repeated across several notices
//! counts once. The "Edge - Chromium" label has a gating rule: the notice must
//! also name the Chromium-based-Edge product id, otherwise the label is
//! dropped even when the description matches.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::ClassifierConfig;
use crate::feed::{RawVulnerability, THREAT_KIND_CLASSIFICATION};
use crate::normalize::NormalizedVulnerability;

/// Count of records per classification label, in config label order.
/// Recomputed per invocation; zero-count labels are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationCounts {
    pub counts: Vec<LabelCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl ClassificationCounts {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
    }
}

/// Labels attributed to one raw entry.
pub fn classify(entry: &RawVulnerability, config: &ClassifierConfig) -> BTreeSet<String> {
    let mut labels = BTreeSet::new();
    for threat in entry.threats() {
        if !threat.is_kind(THREAT_KIND_CLASSIFICATION) {
            continue;
        }
        let description = threat.description_text();
        if description == config.chromium_label {
            if threat.has_product_id(&config.chromium_product_id) {
                labels.insert(description.to_string());
            }
        } else if config.labels.iter().any(|label| label == description) {
            labels.insert(description.to_string());
        }
    }
    labels
}

/// Count label occurrences across a collection of normalized records.
pub fn aggregate_counts(
    records: &[NormalizedVulnerability],
    config: &ClassifierConfig,
) -> ClassificationCounts {
    let counts = config
        .labels
        .iter()
        .map(|label| LabelCount {
            label: label.clone(),
            count: records
                .iter()
                .filter(|record| record.classification_labels.contains(label))
                .count(),
        })
        .collect();
    ClassificationCounts { counts }
}
