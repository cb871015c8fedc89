use std::collections::BTreeSet;

use proptest::prelude::*;

use patchmap::config::TriageConfig;
use patchmap::extract::SeverityBand;
use patchmap::normalize::NormalizedVulnerability;
use patchmap::report::{build_views, ViewName};

fn record(id: usize, score: f64, exploited: bool, windows: bool) -> NormalizedVulnerability {
    let config = TriageConfig::default();
    let severity = patchmap::extract::severity_band(score, &config.severity);
    NormalizedVulnerability {
        id: format!("CVE-2025-{id:04}"),
        title: String::new(),
        description: String::new(),
        score,
        vector: String::new(),
        severity,
        is_critical: severity == SeverityBand::Critical,
        is_exploited: exploited,
        is_publicly_disclosed: false,
        is_likely_exploited: false,
        classification_labels: BTreeSet::new(),
        impacted_products: if windows {
            vec!["Windows 11".to_string()]
        } else {
            vec!["Office 365".to_string()]
        },
        remediation_url: String::new(),
        exploitability_assessment: String::new(),
        residual_notes: String::new(),
    }
}

proptest! {
    #[test]
    fn patch_buckets_partition_needs_patch(
        entries in prop::collection::vec((0.0f64..10.0, any::<bool>(), any::<bool>()), 0..40)
    ) {
        let records: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, (score, exploited, windows))| record(i, *score, *exploited, *windows))
            .collect();

        let config = TriageConfig::default();
        let views = build_views(&records, &config);
        let view = |name: ViewName| {
            views
                .iter()
                .find(|v| v.name == name)
                .unwrap()
                .records
                .iter()
                .map(|r| r.id.clone())
                .collect::<Vec<_>>()
        };

        let needs_patch = view(ViewName::NeedsPatch);
        let patch_now = view(ViewName::PatchNow);
        let patch_later = view(ViewName::PatchLater);

        // Exhaustive and disjoint.
        prop_assert_eq!(patch_now.len() + patch_later.len(), needs_patch.len());
        let now_set: BTreeSet<_> = patch_now.iter().collect();
        prop_assert!(patch_later.iter().all(|id| !now_set.contains(id)));

        // Both buckets preserve NeedsPatch order.
        let mut merged = needs_patch.clone();
        merged.retain(|id| now_set.contains(id));
        prop_assert_eq!(&merged, &patch_now);
        let later_set: BTreeSet<_> = patch_later.iter().collect();
        let mut merged_later = needs_patch.clone();
        merged_later.retain(|id| later_set.contains(id));
        prop_assert_eq!(&merged_later, &patch_later);
    }
}
