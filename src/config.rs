//! Triage policy configuration.
//!
//! The classification label set, severity thresholds, and the patch-now
//! product exclusion are all policy knobs rather than embedded constants, so
//! deployments (and tests) can vary them. Everything defaults to the published
//! bulletin conventions when no config file is present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::TriageError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "patchmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub severity: SeverityThresholds,
    #[serde(default)]
    pub report: ReportPolicy,
}

impl TriageConfig {
    /// Load from an explicit path, or from `patchmap.toml` in the working
    /// directory when present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, TriageError> {
        let candidate = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };
        let raw = std::fs::read_to_string(&candidate)?;
        toml::from_str(&raw)
            .map_err(|e| TriageError::Config(format!("{}: {e}", candidate.display())))
    }
}

/// Fixed classification label set plus the Edge-Chromium gating rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
    /// Label only attributed when the notice names the sentinel product id.
    #[serde(default = "default_chromium_label")]
    pub chromium_label: String,
    /// Product id of Chromium-based Edge in the feed's product tree.
    #[serde(default = "default_chromium_product_id")]
    pub chromium_product_id: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            chromium_label: default_chromium_label(),
            chromium_product_id: default_chromium_product_id(),
        }
    }
}

/// Severity band cut-offs. Bands are half-open, lower bound inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityThresholds {
    #[serde(default = "default_critical_floor")]
    pub critical: f64,
    #[serde(default = "default_important_floor")]
    pub important: f64,
    #[serde(default = "default_moderate_floor")]
    pub moderate: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            critical: default_critical_floor(),
            important: default_important_floor(),
            moderate: default_moderate_floor(),
        }
    }
}

/// View filtering and partitioning policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPolicy {
    #[serde(default = "default_high_severity_threshold")]
    pub high_severity_threshold: f64,
    /// Records whose impacted-product string contains this substring stay out
    /// of the PatchNow bucket; those platforms are patched through a separate
    /// existing process. Case-sensitive. Empty disables the exclusion.
    #[serde(default = "default_patch_now_exclusion")]
    pub patch_now_exclusion: String,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            high_severity_threshold: default_high_severity_threshold(),
            patch_now_exclusion: default_patch_now_exclusion(),
        }
    }
}

fn default_labels() -> Vec<String> {
    [
        "Elevation of Privilege",
        "Security Feature Bypass",
        "Remote Code Execution",
        "Information Disclosure",
        "Denial of Service",
        "Spoofing",
        "Edge - Chromium",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_chromium_label() -> String {
    "Edge - Chromium".to_string()
}

fn default_chromium_product_id() -> String {
    "11655".to_string()
}

fn default_critical_floor() -> f64 {
    9.0
}

fn default_important_floor() -> f64 {
    7.0
}

fn default_moderate_floor() -> f64 {
    4.0
}

fn default_high_severity_threshold() -> f64 {
    8.0
}

fn default_patch_now_exclusion() -> String {
    "Windows".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bulletin_conventions() {
        let config = TriageConfig::default();
        assert_eq!(config.classifier.labels.len(), 7);
        assert_eq!(config.severity.critical, 9.0);
        assert_eq!(config.report.high_severity_threshold, 8.0);
        assert_eq!(config.report.patch_now_exclusion, "Windows");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: TriageConfig = toml::from_str(
            r#"
            [report]
            patch_now_exclusion = "Linux"
            "#,
        )
        .unwrap();
        assert_eq!(config.report.patch_now_exclusion, "Linux");
        assert_eq!(config.report.high_severity_threshold, 8.0);
        assert_eq!(config.classifier.chromium_product_id, "11655");
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triage.toml");
        std::fs::write(&path, "[severity]\ncritical = 8.5\n").unwrap();
        let config = TriageConfig::load(Some(&path)).unwrap();
        assert_eq!(config.severity.critical, 8.5);
    }
}
