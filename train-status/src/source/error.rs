//! Record source error types.

use crate::fetch::FetchError;

/// Errors raised by the scraping library itself.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The library no longer exposes a field it used to
    #[error("no field '{0}' on train record")]
    MissingField(String),

    /// The underlying transport failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Any other library failure
    #[error("{0}")]
    Other(String),
}

/// Errors from looking up a train record.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The record's schema drifted away from what we map
    #[error("incompatible source API: field '{field}' missing")]
    Incompatible { field: String },

    /// The page could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Any other failure while querying the library
    #[error("{0}")]
    Library(String),
}

impl From<LibraryError> for SourceError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::MissingField(field) => SourceError::Incompatible { field },
            LibraryError::Fetch(e) => SourceError::Fetch(e),
            LibraryError::Other(message) => SourceError::Library(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SourceError::Incompatible {
            field: "trainName".into(),
        };
        assert_eq!(
            err.to_string(),
            "incompatible source API: field 'trainName' missing"
        );

        let err = SourceError::Fetch(FetchError::Status {
            status: 502,
            message: "Bad Gateway".into(),
        });
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway");

        let err = LibraryError::MissingField("delay".into());
        assert_eq!(err.to_string(), "no field 'delay' on train record");
    }

    #[test]
    fn missing_field_becomes_incompatible() {
        let err = SourceError::from(LibraryError::MissingField("status".into()));
        assert!(matches!(err, SourceError::Incompatible { field } if field == "status"));

        let err = SourceError::from(LibraryError::Other("boom".into()));
        assert!(matches!(err, SourceError::Library(message) if message == "boom"));
    }
}
