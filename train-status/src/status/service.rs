//! The `GetStatus` operation.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use crate::source::{RecordSource, SourceError};

use super::classify::classify;
use super::mapper::map_record;
use super::result::StatusResult;

const EMPTY_TRAIN_NUMBER: &str = "Train number cannot be empty.";

/// Answers status queries for single trains.
///
/// Every failure is folded into a `found: false` result; callers never see
/// an error for one lookup.
#[derive(Clone)]
pub struct StatusService {
    source: Arc<dyn RecordSource>,
}

impl StatusService {
    /// Create a service reading from `source`.
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Look up the real-time status of `train_number`.
    pub async fn get_status(&self, train_number: &str) -> StatusResult {
        info!(train = train_number, "status requested");

        let result = self.resolve(train_number).await;

        if result.found {
            info!(
                train = train_number,
                category = %result.category,
                delay = result.delay_minutes,
                "train found"
            );
        } else {
            warn!(
                train = train_number,
                error_message = %result.error_message,
                "train not found"
            );
        }

        result
    }

    async fn resolve(&self, train_number: &str) -> StatusResult {
        if train_number.trim().is_empty() {
            return StatusResult::not_found(train_number, EMPTY_TRAIN_NUMBER);
        }

        let lookup = AssertUnwindSafe(self.source.lookup(train_number))
            .catch_unwind()
            .await;

        match lookup {
            Ok(Ok(record)) => {
                let verdict = classify(&record);
                debug!(train = train_number, ?verdict, "record classified");
                map_record(&record, &verdict, train_number)
            }
            Ok(Err(SourceError::Incompatible { field })) => {
                error!(train = train_number, field = %field, "incompatible source API");
                StatusResult::not_found(
                    train_number,
                    format!("Internal server error: Incompatible source API. Field '{field}' missing."),
                )
            }
            Ok(Err(e)) => {
                error!(train = train_number, error = %e, "lookup failed");
                StatusResult::not_found(
                    train_number,
                    format!("Internal server error while fetching train data: {e}"),
                )
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(train = train_number, panic = %message, "lookup panicked");
                StatusResult::not_found(
                    train_number,
                    format!("Internal server error while fetching train data: {message}"),
                )
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
