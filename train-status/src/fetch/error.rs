//! Fetch error types.

/// Errors from the redirecting HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The starting URL or a `Location` header could not be resolved
    #[error("invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    /// Every attempt ended in another redirect
    #[error("redirect budget exceeded after {attempts} attempts fetching {url}")]
    RedirectBudgetExceeded { url: String, attempts: usize },

    /// Final response was outside the 2xx range
    #[error("HTTP {status} {message}")]
    Status { status: u16, message: String },
}
