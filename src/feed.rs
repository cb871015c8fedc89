//! Raw feed document model.
//!
//! The monthly bulletin arrives as deeply nested JSON where any field may be
//! absent or malformed. Every field here is optional; defaults are applied in
//! one place only, the normalizer. Downstream code never touches these types
//! directly once normalization has run.

use std::path::Path;

use serde::Deserialize;

use crate::errors::TriageError;

/// A `{ "Value": ... }` wrapper, the feed's encoding for localized text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

impl TextValue {
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// One month's bulletin document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedDocument {
    #[serde(rename = "DocumentTitle", default)]
    pub document_title: Option<TextValue>,
    /// Absent key means an empty bulletin, not an error.
    #[serde(rename = "Vulnerability", default)]
    pub vulnerabilities: Option<Vec<RawVulnerability>>,
}

impl FeedDocument {
    pub fn title(&self) -> &str {
        self.document_title
            .as_ref()
            .map(TextValue::text)
            .unwrap_or("")
    }

    pub fn entries(&self) -> &[RawVulnerability] {
        self.vulnerabilities.as_deref().unwrap_or_default()
    }

    pub fn from_json(raw: &str) -> Result<Self, TriageError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, TriageError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One vulnerability entry, exactly as published.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVulnerability {
    #[serde(rename = "CVE", default)]
    pub cve: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<TextValue>,
    #[serde(rename = "CVSSScoreSets", default)]
    pub cvss_score_sets: Option<Vec<ScoreSet>>,
    #[serde(rename = "Threats", default)]
    pub threats: Option<Vec<Threat>>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<Vec<VulnNote>>,
    #[serde(rename = "Remediations", default)]
    pub remediations: Option<Vec<Remediation>>,
    #[serde(rename = "ProductStatuses", default)]
    pub product_statuses: Option<Vec<ProductStatus>>,
}

impl RawVulnerability {
    pub fn id(&self) -> &str {
        self.cve.as_deref().unwrap_or("")
    }

    pub fn title_text(&self) -> &str {
        self.title.as_ref().map(TextValue::text).unwrap_or("")
    }

    pub fn score_sets(&self) -> &[ScoreSet] {
        self.cvss_score_sets.as_deref().unwrap_or_default()
    }

    pub fn threats(&self) -> &[Threat] {
        self.threats.as_deref().unwrap_or_default()
    }

    pub fn notes(&self) -> &[VulnNote] {
        self.notes.as_deref().unwrap_or_default()
    }

    pub fn remediations(&self) -> &[Remediation] {
        self.remediations.as_deref().unwrap_or_default()
    }

    pub fn product_statuses(&self) -> &[ProductStatus] {
        self.product_statuses.as_deref().unwrap_or_default()
    }
}

/// One CVSS scoring context. An entry may carry several, one per affected
/// product family.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreSet {
    /// Published as a JSON number or a numeric string depending on the month.
    #[serde(rename = "BaseScore", default)]
    pub base_score: Option<serde_json::Value>,
    #[serde(rename = "Vector", default)]
    pub vector: Option<String>,
}

impl ScoreSet {
    /// Parse the base score leniently. Non-numeric values are skipped by the
    /// caller, never treated as zero candidates.
    pub fn base_score(&self) -> Option<f64> {
        match self.base_score.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn vector_text(&self) -> &str {
        self.vector.as_deref().unwrap_or("")
    }
}

/// Threat notice kinds, discriminated by the feed's integer `Type`.
pub const THREAT_KIND_CLASSIFICATION: i64 = 0;
pub const THREAT_KIND_EXPLOIT_STATUS: i64 = 1;

/// A classification or exploitation-status annotation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Threat {
    /// Integer discriminator in well-formed feeds; read leniently so a
    /// malformed entry degrades instead of failing the document parse.
    #[serde(rename = "Type", default)]
    pub kind: Option<serde_json::Value>,
    #[serde(rename = "ProductID", default)]
    pub product_ids: Option<Vec<String>>,
    #[serde(rename = "Description", default)]
    pub description: Option<TextValue>,
}

impl Threat {
    pub fn is_kind(&self, kind: i64) -> bool {
        self.kind.as_ref().and_then(serde_json::Value::as_i64) == Some(kind)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_ref().map(TextValue::text).unwrap_or("")
    }

    pub fn has_product_id(&self, id: &str) -> bool {
        self.product_ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|p| p == id)
    }
}

/// A free-text note. The kind key is the stringified `Type`, with `Title` as
/// fallback when `Type` is absent or zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VulnNote {
    #[serde(rename = "Type", default)]
    pub kind: Option<serde_json::Value>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

impl VulnNote {
    pub fn kind_key(&self) -> String {
        let from_type = match self.kind.as_ref() {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            // Type 0 is a placeholder in the feed; fall through to Title.
            Some(serde_json::Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        };
        from_type
            .or_else(|| self.title.clone())
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn value_text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Remediation {
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

/// Product applicability group; only the flattened id list matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductStatus {
    #[serde(rename = "ProductID", default)]
    pub product_ids: Option<Vec<String>>,
}
