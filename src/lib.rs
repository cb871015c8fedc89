// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod extract;
pub mod feed;
pub mod fetch;
pub mod normalize;
pub mod output;
pub mod report;

// Re-export commonly used types
pub use crate::classify::{aggregate_counts, classify, ClassificationCounts, LabelCount};
pub use crate::config::{ClassifierConfig, ReportPolicy, SeverityThresholds, TriageConfig};
pub use crate::errors::TriageError;
pub use crate::extract::{
    best_score_and_vector, exploit_flags, flatten_impacted_products, note_value, severity_band,
    ExploitFlags, SeverityBand,
};
pub use crate::feed::{FeedDocument, RawVulnerability};
pub use crate::normalize::{normalize, normalize_all, NormalizedVulnerability};
pub use crate::report::{
    build_report, build_views, detail, nvd_link, select_by_ids, BulletinReport, ReportSummary,
    ReportView, ViewName,
};
