//! Canonical status response.

use serde::{Deserialize, Serialize};

/// The fixed-shape answer to a status query.
///
/// Mirrors a protobuf-style message: strings default to empty and
/// `delay_minutes` to zero. When `found` is true the train fields are
/// meaningful and `error_message` is empty; otherwise only `error_message`
/// is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusResult {
    pub found: bool,
    pub train_number: String,

    /// Train category, e.g. "REG" or "FR"
    pub category: String,
    pub origin_station: String,
    pub destination_station: String,
    pub scheduled_departure: String,
    pub scheduled_arrival: String,
    pub actual_departure: String,
    pub actual_arrival: String,
    pub delay_minutes: i32,

    /// Raw status text from the transit site
    pub status_description: String,
    pub last_detected_station: String,

    /// Never populated: the site gives no reliable detection timestamp
    pub last_detection_time: String,

    pub error_message: String,
}

impl StatusResult {
    /// An unsuccessful result carrying `message`.
    pub fn not_found(train_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            found: false,
            train_number: train_number.into(),
            error_message: message.into(),
            ..Self::default()
        }
    }
}
