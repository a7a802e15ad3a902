//! Train record source.
//!
//! The scraping library answers with a loosely typed record whose schema
//! shifts between versions. This module is the single boundary where that
//! instability is absorbed: [`LibrarySource`] turns whatever the library
//! returns into a [`TrainRecord`] of optional fields, or a typed
//! [`SourceError`] when the record no longer looks the way we expect.

mod adapter;
mod error;
mod library;
mod mock;
mod record;

pub use adapter::{LibrarySource, RecordSource};
pub use error::{LibraryError, SourceError};
pub use library::{JsonTrainLibrary, RawRecord, TrainLibrary};
pub use mock::MockSource;
pub use record::{RecordField, TrainRecord};
