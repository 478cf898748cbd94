// src/fetch/mod.rs
// =============================================================================
// This module downloads the planned files.
//
// Submodules:
// - executor: runs the downloads with a concurrency bound
// - outcome: the per-file result (DONE / SKIP / FAIL)
// =============================================================================

mod executor;
mod outcome;

pub use executor::{execute_fetches, FetchOptions};
pub use outcome::FetchOutcome;
