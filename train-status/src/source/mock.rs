//! Mock record source for running without the transit site.
//!
//! Serves records from memory, optionally loaded from a directory of JSON
//! files, as if they had just been scraped.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use super::adapter::RecordSource;
use super::error::SourceError;
use super::record::TrainRecord;

#[derive(Debug, Clone)]
enum MockEntry {
    Record(TrainRecord),
    Incompatible(String),
    Failure(String),
}

/// Mock record source keyed by train number.
///
/// Unknown trains resolve to an empty record, which is what the scraping
/// library yields for a number the site doesn't know.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    entries: HashMap<String, MockEntry>,
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load records from a directory.
    ///
    /// Expects files named `{number}.json` (e.g. `2345.json`), each holding
    /// one raw record object.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, SourceError> {
        let data_dir = data_dir.as_ref();
        let mut source = Self::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            SourceError::Library(format!("Failed to read mock data directory: {e}"))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                SourceError::Library(format!("Failed to read directory entry: {e}"))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let number = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| SourceError::Library(format!("Invalid filename: {path:?}")))?
                .to_string();

            let json = std::fs::read_to_string(&path)
                .map_err(|e| SourceError::Library(format!("Failed to read {path:?}: {e}")))?;

            let raw = match serde_json::from_str::<Value>(&json) {
                Ok(Value::Object(raw)) => raw,
                Ok(_) => {
                    return Err(SourceError::Library(format!(
                        "Expected a JSON object in {path:?}"
                    )));
                }
                Err(e) => {
                    return Err(SourceError::Library(format!(
                        "Failed to parse {path:?}: {e}"
                    )));
                }
            };

            source = source.with_record(number, TrainRecord::from_raw(&raw)?);
        }

        if source.entries.is_empty() {
            return Err(SourceError::Library(format!(
                "No mock record files found in {data_dir:?}"
            )));
        }

        Ok(source)
    }

    /// Serve `record` for `number`.
    pub fn with_record(mut self, number: impl Into<String>, record: TrainRecord) -> Self {
        self.entries
            .insert(number.into(), MockEntry::Record(record));
        self
    }

    /// Fail lookups of `number` as if the library lost `field`.
    pub fn with_incompatible(mut self, number: impl Into<String>, field: impl Into<String>) -> Self {
        self.entries
            .insert(number.into(), MockEntry::Incompatible(field.into()));
        self
    }

    /// Fail lookups of `number` with a generic library error.
    pub fn with_failure(mut self, number: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries
            .insert(number.into(), MockEntry::Failure(message.into()));
        self
    }

    /// Train numbers with a configured entry.
    pub fn available_trains(&self) -> Vec<&str> {
        let mut numbers: Vec<_> = self.entries.keys().map(String::as_str).collect();
        numbers.sort_unstable();
        numbers
    }
}

#[async_trait]
impl RecordSource for MockSource {
    async fn lookup(&self, train_number: &str) -> Result<TrainRecord, SourceError> {
        match self.entries.get(train_number) {
            Some(MockEntry::Record(record)) => Ok(record.clone()),
            Some(MockEntry::Incompatible(field)) => Err(SourceError::Incompatible {
                field: field.clone(),
            }),
            Some(MockEntry::Failure(message)) => Err(SourceError::Library(message.clone())),
            None => Ok(TrainRecord::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RecordField;

    #[tokio::test]
    async fn serves_configured_entries() {
        let source = MockSource::new()
            .with_record(
                "2345",
                TrainRecord::default().with(RecordField::Status, "in viaggio"),
            )
            .with_incompatible("1", "trainName")
            .with_failure("2", "site down");

        let record = source.lookup("2345").await.unwrap();
        assert_eq!(record.get(RecordField::Status), Some("in viaggio"));

        assert!(matches!(
            source.lookup("1").await,
            Err(SourceError::Incompatible { field }) if field == "trainName"
        ));
        assert!(matches!(
            source.lookup("2").await,
            Err(SourceError::Library(message)) if message == "site down"
        ));
    }

    #[tokio::test]
    async fn unknown_train_is_empty_record() {
        let record = MockSource::new().lookup("404").await.unwrap();
        assert_eq!(record, TrainRecord::default());
    }

    #[tokio::test]
    async fn load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("2345.json"),
            r#"{"status": "Treno in viaggio", "trainName": "REG 2345", "delay": 4}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let source = MockSource::from_dir(dir.path()).unwrap();
        assert_eq!(source.available_trains(), ["2345"]);

        let record = source.lookup("2345").await.unwrap();
        assert_eq!(record.get(RecordField::TrainName), Some("REG 2345"));
        assert_eq!(record.get(RecordField::Delay), Some("4"));
    }

    #[tokio::test]
    async fn load_bundled_mock_data() {
        let source = MockSource::from_dir("data/mock_trains").unwrap();
        assert!(source.available_trains().contains(&"2345"));

        let record = source.lookup("2345").await.unwrap();
        assert_eq!(record.get(RecordField::TrainName), Some("REG 2345"));
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockSource::from_dir(dir.path()).is_err());
    }

    #[test]
    fn non_object_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1.json"), "[]").unwrap();

        let err = MockSource::from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Expected a JSON object"));
    }
}
