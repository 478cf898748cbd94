// src/canvas/client.rs
// =============================================================================
// Talks to the Canvas REST API.
//
// Endpoints used:
// - GET /api/v1/courses/{id}?include[]=syllabus_body  -> the syllabus HTML
// - GET /api/v1/courses/{id}/pages/{page}             -> a page's HTML
// - GET /api/v1/files/{file_id}                       -> file metadata, whose
//   `url` field is then downloaded and written to disk
//
// Every request carries the API token as a bearer token. HTTP failures are
// mapped to ServiceError so callers can tell "bad token" from "gone" from
// "slow down".
// =============================================================================

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::error::ServiceError;
use crate::links::PageRef;

// What the rest of the program needs from the course service
//
// The fetch executor and the pipeline only see this trait, so tests can swap
// in an in-memory fake.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// HTML body of the course syllabus
    async fn course_syllabus(&self) -> Result<String, ServiceError>;

    /// HTML body of one course page
    async fn page_body(&self, page: &PageRef) -> Result<String, ServiceError>;

    /// Downloads a file by ID and writes it to `dest`, replacing any existing file
    async fn download_file(&self, file_id: &str, dest: &Path) -> Result<(), ServiceError>;
}

#[derive(Debug, Deserialize)]
struct CourseResponse {
    syllabus_body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileResponse {
    url: Option<String>,
}

pub struct CanvasClient {
    client: Client,
    base_url: String,
    course_id: String,
    token: String,
}

impl CanvasClient {
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        // No overall request timeout here: downloads can be large, and the
        // fetch executor applies its own per-file limit
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("course-mirror/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(CanvasClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            course_id: config.course_id.clone(),
            token: config.token.clone(),
        })
    }

    async fn get(&self, url: &str) -> Result<Response, ServiceError> {
        let response = self.client.get(url).bearer_auth(&self.token).send().await?;
        check_status(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ServiceError> {
        Ok(self.get(url).await?.json::<T>().await?)
    }
}

#[async_trait]
impl CourseService for CanvasClient {
    async fn course_syllabus(&self) -> Result<String, ServiceError> {
        let url = format!(
            "{}/api/v1/courses/{}?include[]=syllabus_body",
            self.base_url, self.course_id
        );
        let course: CourseResponse = self.get_json(&url).await?;
        // Courses without a syllabus come back with `null`
        Ok(course.syllabus_body.unwrap_or_default())
    }

    async fn page_body(&self, page: &PageRef) -> Result<String, ServiceError> {
        let url = format!(
            "{}/api/v1/courses/{}/pages/{}",
            self.base_url, self.course_id, page
        );
        let page: PageResponse = self.get_json(&url).await?;
        Ok(page.body.unwrap_or_default())
    }

    async fn download_file(&self, file_id: &str, dest: &Path) -> Result<(), ServiceError> {
        let meta_url = format!("{}/api/v1/files/{}", self.base_url, file_id);
        let file: FileResponse = self.get_json(&meta_url).await?;
        let download_url = file.url.ok_or(ServiceError::MissingField("url"))?;

        let response = self.get(&download_url).await?;

        // Only truncate an existing copy once the server has said yes
        let mut file = tokio::fs::File::create(dest).await?;
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

// Turns non-success responses into the matching ServiceError
fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Unauthorized,
        StatusCode::NOT_FOUND => ServiceError::NotFound(url),
        StatusCode::TOO_MANY_REQUESTS => ServiceError::RateLimited,
        other => ServiceError::Status {
            status: other.as_u16(),
            url,
        },
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[async_trait]?
//    - Traits can't always have async methods that work with dyn and Send
//    - The macro rewrites each async fn to return a boxed future
//
// 2. Why Option<String> in the response structs?
//    - Canvas sends `null` for an empty syllabus or page body
//    - unwrap_or_default() turns that into an empty string, i.e. "no links"
// -----------------------------------------------------------------------------
