//! Partial train record.
//!
//! Every field is optional: the scraping library omits whatever the transit
//! site didn't show, and an absent field is not an error on its own.

use serde_json::Value;

use super::error::SourceError;
use super::library::RawRecord;

/// A field the scraping library may expose on a train record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Status,
    TrainName,
    OriginStation,
    DepartingStation,
    DestinationStation,
    ArrivingStation,
    ScheduledDepartureTime,
    ScheduledArrivalTime,
    ActualDepartureTime,
    ActualArrivalTime,
    Delay,
    LastUpdate,
}

impl RecordField {
    /// All fields, in wire order.
    pub const ALL: [RecordField; 12] = [
        RecordField::Status,
        RecordField::TrainName,
        RecordField::OriginStation,
        RecordField::DepartingStation,
        RecordField::DestinationStation,
        RecordField::ArrivingStation,
        RecordField::ScheduledDepartureTime,
        RecordField::ScheduledArrivalTime,
        RecordField::ActualDepartureTime,
        RecordField::ActualArrivalTime,
        RecordField::Delay,
        RecordField::LastUpdate,
    ];

    /// Key used for this field in the library's raw record.
    pub fn key(self) -> &'static str {
        match self {
            RecordField::Status => "status",
            RecordField::TrainName => "trainName",
            RecordField::OriginStation => "originStation",
            RecordField::DepartingStation => "departingStation",
            RecordField::DestinationStation => "destinationStation",
            RecordField::ArrivingStation => "arrivingStation",
            RecordField::ScheduledDepartureTime => "scheduledDepartureTime",
            RecordField::ScheduledArrivalTime => "scheduledArrivalTime",
            RecordField::ActualDepartureTime => "actualDepartureTime",
            RecordField::ActualArrivalTime => "actualArrivalTime",
            RecordField::Delay => "delay",
            RecordField::LastUpdate => "lastUpdate",
        }
    }
}

/// A train record as scraped, one optional text value per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainRecord {
    pub status: Option<String>,
    pub train_name: Option<String>,
    pub origin_station: Option<String>,
    pub departing_station: Option<String>,
    pub destination_station: Option<String>,
    pub arriving_station: Option<String>,
    pub scheduled_departure_time: Option<String>,
    pub scheduled_arrival_time: Option<String>,
    pub actual_departure_time: Option<String>,
    pub actual_arrival_time: Option<String>,
    pub delay: Option<String>,
    pub last_update: Option<String>,
}

impl TrainRecord {
    /// Read a field, if the record carries it.
    pub fn get(&self, field: RecordField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field (builder style).
    pub fn with(mut self, field: RecordField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    /// Build a record from the library's loosely typed output.
    ///
    /// Strings are kept as-is, numbers and booleans are stringified, and
    /// `null` counts as absent. A list or object where a scalar is expected
    /// means the library's schema changed under us.
    pub fn from_raw(raw: &RawRecord) -> Result<Self, SourceError> {
        let mut record = TrainRecord::default();

        for field in RecordField::ALL {
            let Some(value) = raw.get(field.key()) else {
                continue;
            };
            *record.slot_mut(field) = loose_text(field, value)?;
        }

        Ok(record)
    }

    fn slot(&self, field: RecordField) -> &Option<String> {
        match field {
            RecordField::Status => &self.status,
            RecordField::TrainName => &self.train_name,
            RecordField::OriginStation => &self.origin_station,
            RecordField::DepartingStation => &self.departing_station,
            RecordField::DestinationStation => &self.destination_station,
            RecordField::ArrivingStation => &self.arriving_station,
            RecordField::ScheduledDepartureTime => &self.scheduled_departure_time,
            RecordField::ScheduledArrivalTime => &self.scheduled_arrival_time,
            RecordField::ActualDepartureTime => &self.actual_departure_time,
            RecordField::ActualArrivalTime => &self.actual_arrival_time,
            RecordField::Delay => &self.delay,
            RecordField::LastUpdate => &self.last_update,
        }
    }

    fn slot_mut(&mut self, field: RecordField) -> &mut Option<String> {
        match field {
            RecordField::Status => &mut self.status,
            RecordField::TrainName => &mut self.train_name,
            RecordField::OriginStation => &mut self.origin_station,
            RecordField::DepartingStation => &mut self.departing_station,
            RecordField::DestinationStation => &mut self.destination_station,
            RecordField::ArrivingStation => &mut self.arriving_station,
            RecordField::ScheduledDepartureTime => &mut self.scheduled_departure_time,
            RecordField::ScheduledArrivalTime => &mut self.scheduled_arrival_time,
            RecordField::ActualDepartureTime => &mut self.actual_departure_time,
            RecordField::ActualArrivalTime => &mut self.actual_arrival_time,
            RecordField::Delay => &mut self.delay,
            RecordField::LastUpdate => &mut self.last_update,
        }
    }
}

fn loose_text(field: RecordField, value: &Value) -> Result<Option<String>, SourceError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(SourceError::Incompatible {
            field: field.key().to_string(),
        }),
    }
}
