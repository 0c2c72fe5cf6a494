//! Feeding record domain service.
//!
//! Implements the read and write driving ports on top of a
//! [`FeedingRecordRepository`]. Required-field checks, existence checks and
//! creation timestamps live here; the store only persists.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    FeedingRecordRepository, FeedingRecordRepositoryError, FeedingRecordsCommand,
    FeedingRecordsQuery,
};
use crate::domain::{
    Error, FeedingDetails, FeedingRecord, FeedingRecordDraft, FeedingRecordEntry,
    FeedingRecordValidationError, RecordId,
};

/// Feeding record service implementing the driving ports.
#[derive(Clone)]
pub struct FeedingRecordService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> FeedingRecordService<R> {
    /// Create a new service over the given repository and clock.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn map_repository_error(error: FeedingRecordRepositoryError) -> Error {
    match error {
        FeedingRecordRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("feeding record store unavailable: {message}"))
        }
        FeedingRecordRepositoryError::Query { message } => {
            Error::internal(format!("feeding record store error: {message}"))
        }
        FeedingRecordRepositoryError::Missing { id } => record_not_found(RecordId::new(id)),
    }
}

fn map_validation_error(error: FeedingRecordValidationError) -> Error {
    let fields: Vec<&str> = error
        .fields()
        .iter()
        .map(|field| field.form_name())
        .collect();
    Error::invalid_request(error.to_string()).with_details(json!({
        "fields": fields,
        "code": "missing_required_fields",
    }))
}

/// Not-found error for `id`, carrying `{"id", "code": "record_not_found"}`
/// details.
pub fn record_not_found(id: RecordId) -> Error {
    Error::not_found(format!("feeding record {id} not found")).with_details(json!({
        "id": id.get(),
        "code": "record_not_found",
    }))
}

fn validate(draft: FeedingRecordDraft) -> Result<FeedingDetails, Error> {
    draft.validate().map_err(map_validation_error)
}

impl<R> FeedingRecordService<R>
where
    R: FeedingRecordRepository,
{
    async fn require_existing(&self, id: RecordId) -> Result<FeedingRecord, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| record_not_found(id))
    }
}

#[async_trait]
impl<R> FeedingRecordsQuery for FeedingRecordService<R>
where
    R: FeedingRecordRepository,
{
    async fn list_all(&self) -> Result<Vec<FeedingRecord>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<FeedingRecord>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> FeedingRecordsCommand for FeedingRecordService<R>
where
    R: FeedingRecordRepository,
{
    async fn save(&self, draft: FeedingRecordDraft) -> Result<FeedingRecord, Error> {
        let details = validate(draft)?;
        let entry = FeedingRecordEntry::new_record(details, self.clock.utc());
        let record = self
            .repository
            .save(&entry)
            .await
            .map_err(map_repository_error)?;
        info!(record_id = %record.id, cat = %record.details.cat_name, "feeding record created");
        Ok(record)
    }

    async fn update(
        &self,
        id: RecordId,
        draft: FeedingRecordDraft,
    ) -> Result<FeedingRecord, Error> {
        let existing = self.require_existing(id).await?;
        let details = validate(draft)?;
        let entry = FeedingRecordEntry::from(existing.with_details(details));
        let record = self
            .repository
            .save(&entry)
            .await
            .map_err(map_repository_error)?;
        info!(record_id = %record.id, "feeding record updated");
        Ok(record)
    }

    async fn delete(&self, id: RecordId) -> Result<(), Error> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if !exists {
            debug!(record_id = %id, "delete requested for unknown feeding record");
            return Err(record_not_found(id));
        }
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        info!(record_id = %id, "feeding record deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "feeding_record_service_tests.rs"]
mod tests;
