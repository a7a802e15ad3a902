//! Web layer for the train status service.
//!
//! Exposes `GetStatus` as a JSON RPC endpoint plus a plain GET route.

mod dto;
mod routes;
mod state;

pub use dto::GetStatusRequest;
pub use routes::create_router;
pub use state::AppState;
