// src/fetch/outcome.rs
// =============================================================================
// What happened to one planned download.
//
// Exactly one outcome is produced per DownloadPlan. Outcomes are only
// reported, never retried.
// =============================================================================

use serde::Serialize;
use std::fmt;

// #[serde(tag = "outcome")] gives JSON like {"outcome":"done","file_id":"42"}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// The file was downloaded and saved
    Done { file_id: String },
    /// The link points outside the course service, nothing was fetched
    Skip { url: String },
    /// The download was attempted and failed
    Fail { url: String, reason: String },
}

impl FetchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Fail { .. })
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Done { file_id } => write!(f, "DONE: {}", file_id),
            FetchOutcome::Skip { url } => write!(f, "SKIP: {}", url),
            FetchOutcome::Fail { url, reason } => write!(f, "FAIL: {} {}", url, reason),
        }
    }
}
