// src/error.rs
// =============================================================================
// Error types for the whole pipeline.
//
// Where errors happen and what they do:
// - ServiceError: any failed call to the course service. Inside the fetch
//   executor it becomes a FAIL outcome for that one file.
// - DiscoveryError: the syllabus or a page body could not be fetched.
//   Syllabus = fatal for the run, page = that page is skipped.
// - PlanningError: a page directory could not be created. That page is skipped.
// - ConfigError: bad command-line input, fatal before anything starts.
//
// main.rs wraps all of these in anyhow::Error at the very top.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::links::PageRef;

// Failures reported by the remote course service client
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 401/403: bad or missing API token, or no access to the resource
    #[error("unauthorized (check the API token)")]
    Unauthorized,

    /// 404
    #[error("not found: {0}")]
    NotFound(String),

    /// 429: the service asked us to slow down
    #[error("rate limited by the service")]
    RateLimited,

    /// Any other non-success HTTP status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Connection, TLS, timeout or body decoding problems
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Writing the downloaded file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The service answered with JSON that lacks a field we need
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("could not fetch the course syllabus: {0}")]
    Syllabus(#[source] ServiceError),

    #[error("could not fetch page `{page}`: {source}")]
    Page {
        page: PageRef,
        #[source]
        source: ServiceError,
    },
}

#[derive(Debug, Error)]
#[error("could not create directory {}: {source}", .dir.display())]
pub struct PlanningError {
    pub dir: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(pub String);
