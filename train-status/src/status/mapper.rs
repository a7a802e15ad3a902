//! Mapping of scraped records onto [`StatusResult`].

use crate::source::{RecordField, TrainRecord};

use super::classify::Verdict;
use super::result::StatusResult;

// Candidate source fields per result field, most preferred first.
const ORIGIN: &[RecordField] = &[RecordField::OriginStation, RecordField::DepartingStation];
const DESTINATION: &[RecordField] = &[
    RecordField::DestinationStation,
    RecordField::ArrivingStation,
];
const SCHEDULED_DEPARTURE: &[RecordField] = &[RecordField::ScheduledDepartureTime];
const SCHEDULED_ARRIVAL: &[RecordField] = &[RecordField::ScheduledArrivalTime];
const ACTUAL_DEPARTURE: &[RecordField] = &[RecordField::ActualDepartureTime];
const ACTUAL_ARRIVAL: &[RecordField] = &[RecordField::ActualArrivalTime];

/// Build the response for `train_number` from a classified record.
pub fn map_record(record: &TrainRecord, verdict: &Verdict, train_number: &str) -> StatusResult {
    match verdict {
        Verdict::Found => found(record, train_number),
        Verdict::ExplicitError(message) | Verdict::NotFound(Some(message)) => {
            StatusResult::not_found(
                train_number,
                format!("Train {train_number} status: {message}"),
            )
        }
        Verdict::NotFound(None) => StatusResult::not_found(
            train_number,
            format!("Train {train_number} not found or error fetching details."),
        ),
    }
}

fn found(record: &TrainRecord, train_number: &str) -> StatusResult {
    let category = record
        .train_name
        .as_deref()
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or_default();

    StatusResult {
        found: true,
        train_number: train_number.to_string(),
        category: category.to_string(),
        origin_station: resolve(record, ORIGIN),
        destination_station: resolve(record, DESTINATION),
        scheduled_departure: resolve(record, SCHEDULED_DEPARTURE),
        scheduled_arrival: resolve(record, SCHEDULED_ARRIVAL),
        actual_departure: resolve(record, ACTUAL_DEPARTURE),
        actual_arrival: resolve(record, ACTUAL_ARRIVAL),
        delay_minutes: record.delay.as_deref().map(coerce_minutes).unwrap_or_default(),
        status_description: record.status.clone().unwrap_or_default(),
        last_detected_station: record.last_update.clone().unwrap_or_default(),
        last_detection_time: String::new(),
        error_message: String::new(),
    }
}

/// First candidate the record carries, even if empty; `""` if none.
fn resolve(record: &TrainRecord, candidates: &[RecordField]) -> String {
    candidates
        .iter()
        .find_map(|&field| record.get(field))
        .unwrap_or_default()
        .to_string()
}

/// Lenient integer parse: optional sign and leading digits after leading
/// whitespace, anything else is 0. Saturates at the `i32` range.
fn coerce_minutes(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }

    let magnitude: i64 = digits.parse().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
