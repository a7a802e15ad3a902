//! Redirect-following HTTP client.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, LOCATION};
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::error::FetchError;

/// Browser-like User-Agent; the transit site serves reduced pages to
/// unknown clients.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36";

/// Default number of requests issued before giving up on a redirect chain.
const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Default connect and read timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// An HTTP transport that can be injected under the scraping library.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the body of the final (2xx) response.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Configuration for the redirecting fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds
    pub read_timeout_secs: u64,
    /// Total requests allowed per fetch, including the first one
    pub max_attempts: usize,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl FetcherConfig {
    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout(mut self, secs: u64) -> Self {
        self.read_timeout_secs = secs;
        self
    }

    /// Set the redirect budget.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Set a custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Body of a successful fetch, with the status line it arrived with.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that finally answered, after redirects
    pub url: Url,
    /// HTTP status code (always 2xx)
    pub status: u16,
    /// Reason phrase for `status`
    pub status_message: String,
    /// Raw response body
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// HTTP client that follows redirects manually, across hosts and schemes,
/// up to a fixed number of attempts.
#[derive(Debug, Clone)]
pub struct RedirectingFetcher {
    http: reqwest::Client,
    max_attempts: usize,
}

impl RedirectingFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            max_attempts: config.max_attempts,
        })
    }
}

#[async_trait]
impl Transport for RedirectingFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let mut current = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        for attempt in 1..=self.max_attempts {
            let response = self.http.get(current.clone()).send().await?;
            let status = response.status();

            // A 3xx without a Location is terminal and fails the 2xx check below
            let location = response
                .headers()
                .get(LOCATION)
                .filter(|_| status.is_redirection());
            if let Some(location) = location {
                let next = resolve_location(&current, location)?;
                debug!(from = %current, to = %next, attempt, "following redirect");
                current = next;
                continue;
            }

            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    message: reason_phrase(status),
                });
            }

            let body = response.bytes().await?.to_vec();
            debug!(url = %current, status = status.as_u16(), bytes = body.len(), "fetched");

            return Ok(FetchedPage {
                url: current,
                status: status.as_u16(),
                status_message: reason_phrase(status),
                body,
            });
        }

        Err(FetchError::RedirectBudgetExceeded {
            url: url.to_string(),
            attempts: self.max_attempts,
        })
    }
}

/// Resolve a `Location` header against the URL that produced it.
///
/// Absolute locations replace the current URL outright, so scheme and host
/// switches are preserved.
fn resolve_location(current: &Url, location: &HeaderValue) -> Result<Url, FetchError> {
    let location = location.to_str().map_err(|e| FetchError::InvalidUrl {
        url: String::from_utf8_lossy(location.as_bytes()).into_owned(),
        message: e.to_string(),
    })?;

    current.join(location).map_err(|e| FetchError::InvalidUrl {
        url: location.to_string(),
        message: e.to_string(),
    })
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}
