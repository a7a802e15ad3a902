//! The scraping library seam.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::fetch::{FetchError, Transport};

use super::error::LibraryError;

/// A train record exactly as the library hands it over.
pub type RawRecord = serde_json::Map<String, Value>;

/// The external library that knows how to look a train up.
#[async_trait]
pub trait TrainLibrary: Send + Sync {
    /// Fetch the raw record for `number`.
    async fn train(&self, number: &str) -> Result<RawRecord, LibraryError>;
}

/// Library that reads one JSON document per train from `{base_url}/{number}`.
///
/// All network access goes through the injected [`Transport`].
#[derive(Clone)]
pub struct JsonTrainLibrary {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl JsonTrainLibrary {
    /// Create a library rooted at `base_url`, using `transport` for requests.
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    fn train_url(&self, number: &str) -> Result<Url, LibraryError> {
        let invalid = |message: String| {
            LibraryError::Fetch(FetchError::InvalidUrl {
                url: self.base_url.clone(),
                message,
            })
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot have path segments".to_string()))?
            .pop_if_empty()
            .push(number);

        Ok(url)
    }
}

#[async_trait]
impl TrainLibrary for JsonTrainLibrary {
    async fn train(&self, number: &str) -> Result<RawRecord, LibraryError> {
        let url = self.train_url(number)?;
        let page = self.transport.fetch(url.as_str()).await?;
        debug!(train = number, url = %page.url, status = page.status, "train document fetched");

        let document: Value = serde_json::from_slice(&page.body)
            .map_err(|e| LibraryError::Other(format!("malformed train document: {e}")))?;

        match document {
            Value::Object(record) => Ok(record),
            other => Err(LibraryError::Other(format!(
                "expected a JSON object for train {number}, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::fetch::FetchedPage;

    /// Transport that answers every request with the same body and records
    /// the URLs it was asked for.
    struct CannedTransport {
        body: &'static str,
        requested: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn new(body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                body,
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(FetchedPage {
                url: Url::parse(url).unwrap(),
                status: 200,
                status_message: "OK".to_string(),
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage, FetchError> {
            Err(FetchError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn reads_object_through_transport() {
        let transport = CannedTransport::new(r#"{"status": "in viaggio", "delay": 3}"#);
        let library = JsonTrainLibrary::new("http://vt.example/trains/", transport.clone());

        let record = library.train("2345").await.unwrap();

        assert_eq!(record["status"], "in viaggio");
        assert_eq!(record["delay"], 3);
        assert_eq!(
            transport.requested.lock().unwrap().as_slice(),
            ["http://vt.example/trains/2345"]
        );
    }

    #[tokio::test]
    async fn train_number_is_a_single_path_segment() {
        let transport = CannedTransport::new("{}");
        let library = JsonTrainLibrary::new("http://vt.example/trains", transport.clone());

        library.train("12/../34").await.unwrap();

        assert_eq!(
            transport.requested.lock().unwrap().as_slice(),
            ["http://vt.example/trains/12%2F..%2F34"]
        );
    }

    #[tokio::test]
    async fn non_object_document_is_rejected() {
        let library = JsonTrainLibrary::new("http://vt.example", CannedTransport::new("[1, 2]"));

        let err = library.train("1").await.unwrap_err();

        assert!(matches!(err, LibraryError::Other(ref m) if m.contains("an array")));
    }

    #[tokio::test]
    async fn malformed_document_is_rejected() {
        let library = JsonTrainLibrary::new("http://vt.example", CannedTransport::new("<html>"));

        let err = library.train("1").await.unwrap_err();

        assert!(err.to_string().starts_with("malformed train document"));
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let library = JsonTrainLibrary::new("http://vt.example", Arc::new(FailingTransport));

        let err = library.train("1").await.unwrap_err();

        assert!(matches!(
            err,
            LibraryError::Fetch(FetchError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn invalid_base_url() {
        let library = JsonTrainLibrary::new("not a url", Arc::new(FailingTransport));

        let err = library.train("1").await.unwrap_err();

        assert!(matches!(
            err,
            LibraryError::Fetch(FetchError::InvalidUrl { .. })
        ));
    }
}
