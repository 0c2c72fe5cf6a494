//! Driving port for changing feeding records.
//!
//! The [`FeedingRecordsCommand`] trait is the inbound contract for creating,
//! replacing and removing records. Implementations validate drafts before
//! any store write.

use async_trait::async_trait;

use crate::domain::{Error, FeedingRecord, FeedingRecordDraft, RecordId};

/// Domain use-case port for feeding record mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedingRecordsCommand: Send + Sync {
    /// Validate and store a new record.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request error when the cat name or feeding time is
    /// missing.
    async fn save(&self, draft: FeedingRecordDraft) -> Result<FeedingRecord, Error>;

    /// Replace the caller-controlled fields of an existing record.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no record has the identifier, and an
    /// invalid-request error when the draft lacks required fields.
    async fn update(&self, id: RecordId, draft: FeedingRecordDraft)
    -> Result<FeedingRecord, Error>;

    /// Remove an existing record.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no record has the identifier.
    async fn delete(&self, id: RecordId) -> Result<(), Error>;
}
