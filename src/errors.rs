//! Error taxonomy for a triage run.
//!
//! Only a failed feed fetch (or an unreadable document) aborts a run.
//! Malformed individual entries are absorbed by defaulting inside the
//! normalizer and never surface here. A missed detail lookup is an
//! `Option::None` at the library boundary, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    /// Transport-level failure talking to the bulletin API.
    #[error("bulletin data unavailable: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("bulletin data unavailable: HTTP {status} for month {month}")]
    FeedStatus { status: u16, month: String },

    /// The document as a whole failed to parse as JSON.
    #[error("malformed feed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
