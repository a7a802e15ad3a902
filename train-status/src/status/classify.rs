//! Classification of scraped records.

use crate::source::TrainRecord;

/// Status text fragments that mark a train as missing, cancelled or
/// suppressed. Matched as case-insensitive substrings.
pub const ERROR_KEYWORDS: [&str; 6] = [
    "non trovato",
    "not found",
    "cancellato",
    "cancelled",
    "soppresso",
    "suppressed",
];

/// What a scraped record says about the train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// A genuine, currently tracked train.
    Found,

    /// The site explicitly reported a problem; carries the raw status.
    ExplicitError(String),

    /// Nothing usable, with the raw status as an advisory if there was one.
    NotFound(Option<String>),
}

/// Decide whether `record` describes a tracked train.
///
/// Error keywords win over everything else, so a cancelled train with a
/// name is still an error.
pub fn classify(record: &TrainRecord) -> Verdict {
    let raw_status = record.status.as_deref().unwrap_or_default();
    let status = raw_status.trim().to_lowercase();

    if status.is_empty() {
        return Verdict::NotFound(None);
    }

    if ERROR_KEYWORDS.iter().any(|keyword| status.contains(keyword)) {
        return Verdict::ExplicitError(raw_status.to_string());
    }

    let has_name = record
        .train_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());

    if has_name {
        Verdict::Found
    } else {
        Verdict::NotFound(Some(raw_status.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RecordField;

    fn record(status: &str, name: Option<&str>) -> TrainRecord {
        let record = TrainRecord::default().with(RecordField::Status, status);
        match name {
            Some(name) => record.with(RecordField::TrainName, name),
            None => record,
        }
    }

    #[test]
    fn running_train_is_found() {
        assert_eq!(
            classify(&record("Treno in viaggio", Some("REG 2345"))),
            Verdict::Found
        );
    }

    #[test]
    fn cancelled_train_is_explicit_error() {
        assert_eq!(
            classify(&record("Treno cancellato", Some("REG 2345"))),
            Verdict::ExplicitError("Treno cancellato".to_string())
        );
    }

    #[test]
    fn keyword_match_ignores_case() {
        assert_eq!(
            classify(&record("TRENO SOPPRESSO", None)),
            Verdict::ExplicitError("TRENO SOPPRESSO".to_string())
        );
        assert_eq!(
            classify(&record("Train Not Found", None)),
            Verdict::ExplicitError("Train Not Found".to_string())
        );
    }

    #[test]
    fn keyword_inside_a_word_still_matches() {
        assert!(matches!(
            classify(&record("partially-cancelledx", Some("IC 500"))),
            Verdict::ExplicitError(_)
        ));
    }

    #[test]
    fn missing_or_blank_status_is_not_found() {
        assert_eq!(classify(&TrainRecord::default()), Verdict::NotFound(None));
        assert_eq!(classify(&record("", Some("REG 1"))), Verdict::NotFound(None));
        assert_eq!(
            classify(&record(" \t\n", Some("REG 1"))),
            Verdict::NotFound(None)
        );
    }

    #[test]
    fn status_without_name_is_advisory() {
        assert_eq!(
            classify(&record("Treno in viaggio", None)),
            Verdict::NotFound(Some("Treno in viaggio".to_string()))
        );
        assert_eq!(
            classify(&record("Treno in viaggio", Some("   "))),
            Verdict::NotFound(Some("Treno in viaggio".to_string()))
        );
    }
}
