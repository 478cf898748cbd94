// src/pipeline.rs
// =============================================================================
// Builds the full download plan for a course.
//
// Steps:
// 1. Fetch the syllabus (if this fails, there's nothing to do: fatal)
// 2. Find the course pages it links to
// 3. For each page: fetch its body and plan a download for every link on it
//
// A page whose body can't be fetched, or whose directory can't be created,
// is logged and skipped. The other pages still get planned.
// =============================================================================

use std::collections::HashSet;

use crate::canvas::CourseService;
use crate::config::Config;
use crate::error::DiscoveryError;
use crate::links::discover_pages;
use crate::plan::{plan_downloads, DownloadPlan};

#[derive(Debug, Default)]
pub struct Discovery {
    pub plans: Vec<DownloadPlan>,
    /// Distinct pages linked from the syllabus
    pub pages_found: usize,
    /// Pages that were skipped because of an error
    pub pages_failed: usize,
}

pub async fn build_plans<S>(service: &S, config: &Config) -> Result<Discovery, DiscoveryError>
where
    S: CourseService + ?Sized,
{
    let syllabus = service
        .course_syllabus()
        .await
        .map_err(DiscoveryError::Syllabus)?;

    let mut discovery = Discovery::default();
    let mut seen = HashSet::new();

    for page in discover_pages(&syllabus, &config.base_url, &config.course_id) {
        // The same page is often linked more than once
        if !seen.insert(page.clone()) {
            continue;
        }
        discovery.pages_found += 1;

        let body = match service.page_body(&page).await {
            Ok(body) => body,
            Err(source) => {
                let err = DiscoveryError::Page { page, source };
                tracing::warn!(error = %err, "skipping page");
                discovery.pages_failed += 1;
                continue;
            }
        };

        match plan_downloads(&config.output_dir, &page, &body) {
            Ok(plans) => {
                tracing::info!(page = %page, files = plans.len(), "planned page");
                discovery.plans.extend(plans);
            }
            Err(err) => {
                tracing::warn!(page = %page, error = %err, "skipping page");
                discovery.pages_failed += 1;
            }
        }
    }

    Ok(discovery)
}
