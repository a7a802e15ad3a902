//! Record source trait and the library-backed implementation.

use async_trait::async_trait;

use super::error::SourceError;
use super::library::TrainLibrary;
use super::record::TrainRecord;

/// Anything that can look up the current record for a train number.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Look up the record for `train_number`.
    ///
    /// Library failures come back as typed [`SourceError`]s; a record with
    /// no useful fields is still `Ok`.
    async fn lookup(&self, train_number: &str) -> Result<TrainRecord, SourceError>;
}

/// Record source backed by a [`TrainLibrary`].
#[derive(Clone)]
pub struct LibrarySource<L> {
    library: L,
}

impl<L: TrainLibrary> LibrarySource<L> {
    /// Wrap a library.
    pub fn new(library: L) -> Self {
        Self { library }
    }
}

#[async_trait]
impl<L: TrainLibrary> RecordSource for LibrarySource<L> {
    async fn lookup(&self, train_number: &str) -> Result<TrainRecord, SourceError> {
        let raw = self.library.train(train_number).await?;
        TrainRecord::from_raw(&raw)
    }
}
