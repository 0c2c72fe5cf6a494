//! Port for feeding record persistence.
//!
//! [`FeedingRecordRepository`] exposes generic persistence primitives keyed by
//! [`RecordId`]. Adapters never validate records; that belongs to the domain
//! service.

use async_trait::async_trait;

use crate::domain::{FeedingRecord, FeedingRecordEntry, RecordId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by feeding record repository adapters.
    pub enum FeedingRecordRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "feeding record repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "feeding record repository query failed: {message}",
        /// A replacement targeted a record that no longer exists.
        Missing { id: i64 } =>
            "feeding record {id} no longer exists",
    }
}

/// Persistence port for feeding records.
///
/// # Ordering
///
/// [`FeedingRecordRepository::find_all`] returns records in ascending
/// identifier order, which matches insertion order for store-assigned ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedingRecordRepository: Send + Sync {
    /// Insert or replace a record.
    ///
    /// Entries without an id are inserted and receive a fresh identifier.
    /// Entries with an id replace the caller-controlled fields of the stored
    /// row; the stored creation timestamp is kept.
    ///
    /// # Errors
    ///
    /// Returns [`FeedingRecordRepositoryError::Missing`] when replacing a row
    /// that has been deleted in the meantime.
    async fn save(
        &self,
        entry: &FeedingRecordEntry,
    ) -> Result<FeedingRecord, FeedingRecordRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(
        &self,
        id: RecordId,
    ) -> Result<Option<FeedingRecord>, FeedingRecordRepositoryError>;

    /// Fetch every stored record.
    async fn find_all(&self) -> Result<Vec<FeedingRecord>, FeedingRecordRepositoryError>;

    /// Report whether a record with the identifier exists.
    async fn exists_by_id(&self, id: RecordId) -> Result<bool, FeedingRecordRepositoryError>;

    /// Remove a record. Absent identifiers are not an error.
    async fn delete_by_id(&self, id: RecordId) -> Result<(), FeedingRecordRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_error_names_the_record() {
        let error = FeedingRecordRepositoryError::missing(12_i64);
        assert_eq!(error.to_string(), "feeding record 12 no longer exists");
    }

    #[rstest]
    fn connection_error_keeps_the_message() {
        let error = FeedingRecordRepositoryError::connection("pool exhausted");
        assert!(matches!(
            error,
            FeedingRecordRepositoryError::Connection { ref message } if message == "pool exhausted"
        ));
    }
}
