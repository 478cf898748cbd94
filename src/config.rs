// src/config.rs
// =============================================================================
// Run configuration, built once at startup and passed down by reference.
//
// The course URL carries two things we need:
//
//   https://lms.example.edu/courses/123
//   \_____________________/         \_/
//         base_url               course_id
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::fetch::FetchOptions;

pub const DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    /// scheme://host[:port], no trailing slash
    pub base_url: String,
    pub course_id: String,
    pub token: String,
    pub concurrency: usize,
    pub output_dir: PathBuf,
    /// None = a download may take as long as it likes
    pub fetch_timeout: Option<Duration>,
}

impl Config {
    // Builds a configuration with default settings from a course URL and a token
    pub fn new(course_url: &str, token: impl Into<String>) -> Result<Self, ConfigError> {
        let (base_url, course_id) = split_course_url(course_url)?;

        Ok(Config {
            base_url,
            course_id,
            token: token.into(),
            concurrency: DEFAULT_CONCURRENCY,
            output_dir: PathBuf::from("."),
            fetch_timeout: None,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.token.trim().is_empty() {
            return Err(ConfigError("the API token is empty".to_string()));
        }

        let config = Config::new(&cli.course_url, cli.token.clone())?
            .with_concurrency(cli.concurrency)?
            .with_output_dir(cli.output_dir.clone())
            .with_fetch_timeout(match cli.timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            });

        Ok(config)
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Result<Self, ConfigError> {
        if concurrency == 0 {
            return Err(ConfigError("concurrency must be at least 1".to_string()));
        }
        self.concurrency = concurrency;
        Ok(self)
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            concurrency: self.concurrency,
            timeout: self.fetch_timeout,
        }
    }
}

// Splits "https://host/courses/123" into ("https://host", "123")
fn split_course_url(course_url: &str) -> Result<(String, String), ConfigError> {
    let url = Url::parse(course_url)
        .map_err(|e| ConfigError(format!("invalid course URL '{}': {}", course_url, e)))?;

    let host = url
        .host_str()
        .ok_or_else(|| ConfigError(format!("course URL has no host: {}", course_url)))?;

    let base_url = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };

    let course_id = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| ConfigError(format!("course URL has no course ID: {}", course_url)))?
        .to_string();

    Ok((base_url, course_id))
}
