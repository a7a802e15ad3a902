//! Data transfer objects for web requests.

use serde::{Deserialize, Serialize};

/// Body of a `GetStatus` RPC call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusRequest {
    /// Train number, e.g. "2345"
    pub train_number: String,
}
