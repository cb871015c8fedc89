//! JSON rendering: the full report, and the single-record detail payload.

use anyhow::Result;
use serde::Serialize;

use crate::normalize::NormalizedVulnerability;
use crate::report::{nvd_link, BulletinReport};

/// Detail payload served for one identifier.
#[derive(Debug, Clone, Serialize)]
pub struct DetailPayload {
    pub id: String,
    pub title: String,
    pub description: String,
    pub remediation_url: String,
    pub score: f64,
    pub vector: String,
    pub nvd_link: String,
}

impl DetailPayload {
    pub fn from_record(record: &NormalizedVulnerability) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            remediation_url: record.remediation_url.clone(),
            score: record.score,
            vector: record.vector.clone(),
            nvd_link: nvd_link(&record.id),
        }
    }
}

pub fn format_report_json(report: &BulletinReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn format_detail_json(record: &NormalizedVulnerability) -> Result<String> {
    Ok(serde_json::to_string_pretty(&DetailPayload::from_record(
        record,
    ))?)
}
