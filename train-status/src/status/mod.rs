//! Train status lookup.
//!
//! [`StatusService::get_status`] composes a [`RecordSource`] lookup with
//! [`classify`] and [`map_record`], and is the only place where lookup
//! failures are turned into error results.
//!
//! [`RecordSource`]: crate::source::RecordSource

mod classify;
mod mapper;
mod result;
mod service;

pub use classify::{ERROR_KEYWORDS, Verdict, classify};
pub use mapper::map_record;
pub use result::StatusResult;
pub use service::StatusService;
