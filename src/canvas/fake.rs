// src/canvas/fake.rs
// =============================================================================
// In-memory CourseService for tests.
//
// Records how it was called: how many downloads were requested, which file
// IDs, and the highest number of downloads that were running at once.
// =============================================================================

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::CourseService;
use crate::error::ServiceError;
use crate::links::PageRef;

#[derive(Default)]
pub struct FakeService {
    pub syllabus: Option<String>,
    pub pages: HashMap<String, String>,
    /// File IDs whose download fails
    pub failing_files: HashSet<String>,
    pub fail_all_downloads: bool,
    /// How long each download "takes"
    pub download_delay: Duration,
    /// Downloads of these IDs never finish
    pub hanging_files: HashSet<String>,
    /// Actually write a file to the destination
    pub write_files: bool,

    pub download_calls: AtomicUsize,
    pub page_calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub requested_ids: Mutex<Vec<String>>,
}

impl FakeService {
    pub fn with_syllabus(syllabus: &str) -> Self {
        FakeService {
            syllabus: Some(syllabus.to_string()),
            ..Default::default()
        }
    }

    pub fn page(mut self, name: &str, body: &str) -> Self {
        self.pages.insert(name.to_string(), body.to_string());
        self
    }

    pub fn downloads(&self) -> usize {
        self.download_calls.load(Ordering::SeqCst)
    }

    pub fn peak_concurrency(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CourseService for FakeService {
    async fn course_syllabus(&self) -> Result<String, ServiceError> {
        self.syllabus.clone().ok_or(ServiceError::Unauthorized)
    }

    async fn page_body(&self, page: &PageRef) -> Result<String, ServiceError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(page.as_str())
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(page.to_string()))
    }

    async fn download_file(&self, file_id: &str, dest: &Path) -> Result<(), ServiceError> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids
            .lock()
            .unwrap()
            .push(file_id.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if self.hanging_files.contains(file_id) {
            std::future::pending::<()>().await;
        }
        if !self.download_delay.is_zero() {
            tokio::time::sleep(self.download_delay).await;
        }

        let result = if self.fail_all_downloads || self.failing_files.contains(file_id) {
            Err(ServiceError::NotFound(file_id.to_string()))
        } else if self.write_files {
            tokio::fs::write(dest, file_id.as_bytes())
                .await
                .map_err(ServiceError::from)
        } else {
            Ok(())
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
