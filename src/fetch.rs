//! Bulletin feed fetch.
//!
//! One blocking GET per run, with a request timeout. Failures surface to the
//! caller as `TriageError::Fetch`/`FeedStatus`; there is no retry and no
//! caching here.

use std::time::Duration;

use reqwest::header::ACCEPT;

use crate::errors::TriageError;
use crate::feed::FeedDocument;

pub const API_BASE_URL: &str = "https://api.msrc.microsoft.com/cvrf/v3.0/cvrf";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// The bulletin's month key, e.g. `2025-Aug`.
pub fn current_year_month() -> String {
    chrono::Local::now().format("%Y-%b").to_string()
}

pub fn feed_url(year_month: &str) -> String {
    format!("{API_BASE_URL}/{year_month}")
}

/// Fetch one month's bulletin document.
pub fn fetch_feed(year_month: &str) -> Result<FeedDocument, TriageError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    log::info!("fetching bulletin for {year_month}");
    let response = client
        .get(feed_url(year_month))
        .header(ACCEPT, "application/json")
        .send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(TriageError::FeedStatus {
            status: status.as_u16(),
            month: year_month.to_string(),
        });
    }
    Ok(response.json()?)
}
