//! Field extractors: pure functions that each pull one derived value out of a
//! raw vulnerability entry. The normalizer composes these; nothing else calls
//! into the raw model.

use serde::{Deserialize, Serialize};

use crate::config::SeverityThresholds;
use crate::feed::{RawVulnerability, THREAT_KIND_EXPLOIT_STATUS};

/// Note kinds consumed into dedicated fields; everything else lands in the
/// residual notes.
pub const RESERVED_NOTE_KINDS: [&str; 3] = ["description", "severity", "exploitabilityassessment"];

/// Coarse severity label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityBand {
    Critical,
    Important,
    Moderate,
    Low,
    None,
}

impl SeverityBand {
    /// Display string matching the bulletin's severity column, which leaves
    /// unscored entries blank.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Critical => "Critical",
            SeverityBand::Important => "Important",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::Low => "Low",
            SeverityBand::None => "",
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band a score. Lower bounds are inclusive: exactly 9.0 is Critical,
/// exactly 7.0 is Important.
pub fn severity_band(score: f64, thresholds: &SeverityThresholds) -> SeverityBand {
    if score >= thresholds.critical {
        SeverityBand::Critical
    } else if score >= thresholds.important {
        SeverityBand::Important
    } else if score >= thresholds.moderate {
        SeverityBand::Moderate
    } else if score > 0.0 {
        SeverityBand::Low
    } else {
        SeverityBand::None
    }
}

/// Pick the authoritative score: the maximum parseable base score across all
/// score sets, paired with that set's vector. Unparseable or negative scores
/// are skipped, not treated as zero candidates. `(0.0, "")` when nothing is
/// usable, keeping the record score at or above zero.
pub fn best_score_and_vector(entry: &RawVulnerability) -> (f64, String) {
    let mut best: Option<(f64, &str)> = None;
    for set in entry.score_sets() {
        let Some(score) = set.base_score() else {
            continue;
        };
        if score < 0.0 {
            continue;
        }
        match best {
            Some((current, _)) if current >= score => {}
            _ => best = Some((score, set.vector_text())),
        }
    }
    match best {
        Some((score, vector)) => (score, vector.to_string()),
        None => (0.0, String::new()),
    }
}

/// First note whose kind matches, case-insensitively; trimmed value or "".
pub fn note_value(entry: &RawVulnerability, kind: &str) -> String {
    let wanted = kind.to_lowercase();
    entry
        .notes()
        .iter()
        .find(|note| note.kind_key() == wanted)
        .map(|note| note.value_text().trim().to_string())
        .unwrap_or_default()
}

/// Every product id across every product-status group, source order.
pub fn flatten_impacted_products(entry: &RawVulnerability) -> Vec<String> {
    entry
        .product_statuses()
        .iter()
        .flat_map(|status| status.product_ids.as_deref().unwrap_or_default())
        .cloned()
        .collect()
}

/// First remediation entry carrying a non-empty URL, or "".
pub fn first_remediation_url(entry: &RawVulnerability) -> String {
    entry
        .remediations()
        .iter()
        .filter_map(|r| r.url.as_deref())
        .find(|url| !url.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Notes not consumed into a dedicated field, "; "-joined in source order.
pub fn residual_notes(entry: &RawVulnerability) -> String {
    entry
        .notes()
        .iter()
        .filter(|note| !RESERVED_NOTE_KINDS.contains(&note.kind_key().as_str()))
        .map(|note| note.value_text().trim().to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Exploitation state derived from exploit-status threat notices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExploitFlags {
    pub exploited: bool,
    pub publicly_disclosed: bool,
    pub likely_exploited: bool,
}

#[derive(Debug, Clone, Copy)]
enum ExploitSignal {
    Exploited,
    PubliclyDisclosed,
    LikelyExploited,
}

/// Marker table scanned against lowercased notice text. The published feed is
/// inconsistent about casing, so all three markers match case-insensitively.
const EXPLOIT_MARKERS: [(&str, ExploitSignal); 3] = [
    ("exploited:yes", ExploitSignal::Exploited),
    ("public", ExploitSignal::PubliclyDisclosed),
    ("exploitation more likely", ExploitSignal::LikelyExploited),
];

/// Scan exploit-status notices for the known markers.
pub fn exploit_flags(entry: &RawVulnerability) -> ExploitFlags {
    let mut flags = ExploitFlags::default();
    for threat in entry.threats() {
        if !threat.is_kind(THREAT_KIND_EXPLOIT_STATUS) {
            continue;
        }
        let text = threat.description_text().to_lowercase();
        for (marker, signal) in EXPLOIT_MARKERS {
            if text.contains(marker) {
                match signal {
                    ExploitSignal::Exploited => flags.exploited = true,
                    ExploitSignal::PubliclyDisclosed => flags.publicly_disclosed = true,
                    ExploitSignal::LikelyExploited => flags.likely_exploited = true,
                }
            }
        }
    }
    flags
}
