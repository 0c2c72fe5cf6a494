//! Driving port for reading feeding records.
//!
//! HTTP handlers use this port to render the list and edit views without
//! importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, FeedingRecord, RecordId};

/// Domain use-case port for reading feeding records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedingRecordsQuery: Send + Sync {
    /// Return every record. No filtering and no pagination.
    async fn list_all(&self) -> Result<Vec<FeedingRecord>, Error>;

    /// Return the record with the identifier, if any.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<FeedingRecord>, Error>;
}
