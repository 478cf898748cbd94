// src/fetch/executor.rs
// =============================================================================
// Runs every planned download with a bounded number in flight.
//
// How it works:
// 1. Each plan becomes a future that either skips (link outside the service),
//    or downloads the file through the CourseService
// 2. buffer_unordered(N) keeps at most N of those futures running; the rest
//    wait their turn
// 3. Outcomes come out of the stream as soon as each download finishes, so
//    the order is completion order, not plan order
//
// A failed download is turned into a Fail outcome right where it happens.
// Nothing a single download does can stop the others.
// =============================================================================

use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};

use super::outcome::FetchOutcome;
use crate::canvas::CourseService;
use crate::links::last_path_segment;
use crate::plan::DownloadPlan;

#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Maximum number of downloads in flight
    pub concurrency: usize,
    /// Per-download limit; a download that takes longer becomes a Fail
    pub timeout: Option<Duration>,
}

// Downloads all plans concurrently
//
// Parameters:
//   service: the course service that performs the actual downloads
//   plans: what to download and where to save it
//   base_url: links that don't live under this URL are skipped
//   options: concurrency bound and per-download timeout
//
// Returns: a stream yielding exactly one FetchOutcome per plan, in the order
// the downloads complete
pub fn execute_fetches<'a, S>(
    service: &'a S,
    plans: Vec<DownloadPlan>,
    base_url: &'a str,
    options: FetchOptions,
) -> impl Stream<Item = FetchOutcome> + 'a
where
    S: CourseService + ?Sized,
{
    stream::iter(plans)
        .map(move |plan| fetch_one(service, plan, base_url, options.timeout))
        // buffer_unordered(0) would never make progress
        .buffer_unordered(options.concurrency.max(1))
}

async fn fetch_one<S>(
    service: &S,
    plan: DownloadPlan,
    base_url: &str,
    timeout: Option<Duration>,
) -> FetchOutcome
where
    S: CourseService + ?Sized,
{
    if !is_hosted_under(&plan.source_url, base_url) {
        return FetchOutcome::Skip {
            url: plan.source_url,
        };
    }

    let file_id = last_path_segment(&plan.source_url).to_string();
    tracing::info!(
        file_id = %file_id,
        destination = %plan.destination.display(),
        "downloading"
    );

    let download = service.download_file(&file_id, &plan.destination);
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, download).await {
            Ok(result) => result,
            Err(_) => {
                return FetchOutcome::Fail {
                    url: plan.source_url,
                    reason: format!("timed out after {}s", limit.as_secs_f64()),
                }
            }
        },
        None => download.await,
    };

    match result {
        Ok(()) => FetchOutcome::Done { file_id },
        Err(e) => {
            tracing::debug!(file_id = %file_id, error = %e, "download failed");
            FetchOutcome::Fail {
                url: plan.source_url,
                reason: e.to_string(),
            }
        }
    }
}

// Checks whether a link points into the course service
//
// "https://lms.example.edu/files/1" is under "https://lms.example.edu",
// "https://lms.example.edu.evil.com/files/1" is not
fn is_hosted_under(url: &str, base_url: &str) -> bool {
    let base_url = base_url.trim_end_matches('/');
    match url.strip_prefix(base_url) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why buffer_unordered instead of spawning a task per file?
//    - buffer_unordered(N) polls at most N futures at a time
//    - The next plan is only started when one of the N finishes
//    - So the bound is exact, and no download ever waits on a thread
//
// 2. Why return a Stream instead of a Vec?
//    - The caller can print each outcome the moment it is ready
//    - Tests can still .collect() it into a Vec
//
// 3. What does `S: CourseService + ?Sized` mean?
//    - ?Sized lets S be a trait object too (e.g. &dyn CourseService)
//    - The executor doesn't care whether it talks to Canvas or a fake
// -----------------------------------------------------------------------------
