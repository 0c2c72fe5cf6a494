//! PostgreSQL-backed `FeedingRecordRepository` implementation using Diesel.
//!
//! Inserts let the `BIGSERIAL` sequence assign identifiers. Replacements
//! only touch the caller-controlled columns, so `created_at` keeps its
//! original value.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FeedingRecordRepository, FeedingRecordRepositoryError};
use crate::domain::{CatName, FeedingDetails, FeedingRecord, FeedingRecordEntry, RecordId};

use super::models::{FeedingRecordChangeset, FeedingRecordRow, NewFeedingRecordRow};
use super::pool::{DbPool, PoolError};
use super::schema::feeding_records;

/// Diesel-backed implementation of the `FeedingRecordRepository` port.
#[derive(Clone)]
pub struct DieselFeedingRecordRepository {
    pool: DbPool,
}

impl DieselFeedingRecordRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FeedingRecordRepositoryError {
    FeedingRecordRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> FeedingRecordRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => FeedingRecordRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            FeedingRecordRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FeedingRecordRepositoryError::connection("database connection error")
        }
        _ => FeedingRecordRepositoryError::query("database error"),
    }
}

/// Convert a row to a domain record. Rows with a blank cat name violate the
/// table's check constraint and are reported as query failures.
fn row_to_record(row: FeedingRecordRow) -> Result<FeedingRecord, FeedingRecordRepositoryError> {
    let cat_name = CatName::new(&row.cat_name).map_err(|_| {
        FeedingRecordRepositoryError::query(format!("row {} has a blank cat name", row.id))
    })?;

    Ok(FeedingRecord {
        id: RecordId::new(row.id),
        details: FeedingDetails {
            cat_name,
            feeding_time: row.feeding_time,
            food_type: row.food_type,
            caretaker: row.caretaker,
        },
        created_at: row.created_at,
    })
}

fn changeset(details: &FeedingDetails) -> FeedingRecordChangeset<'_> {
    FeedingRecordChangeset {
        cat_name: details.cat_name.as_ref(),
        feeding_time: details.feeding_time,
        food_type: details.food_type.as_deref(),
        caretaker: details.caretaker.as_deref(),
    }
}

#[async_trait]
impl FeedingRecordRepository for DieselFeedingRecordRepository {
    async fn save(
        &self,
        entry: &FeedingRecordEntry,
    ) -> Result<FeedingRecord, FeedingRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let details = &entry.details;

        let row = match entry.id {
            None => {
                let new_row = NewFeedingRecordRow {
                    cat_name: details.cat_name.as_ref(),
                    feeding_time: details.feeding_time,
                    food_type: details.food_type.as_deref(),
                    caretaker: details.caretaker.as_deref(),
                    created_at: entry.created_at,
                };

                diesel::insert_into(feeding_records::table)
                    .values(&new_row)
                    .returning(FeedingRecordRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?
            }
            Some(id) => diesel::update(feeding_records::table.find(id.get()))
                .set(&changeset(details))
                .returning(FeedingRecordRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?
                .ok_or_else(|| FeedingRecordRepositoryError::missing(id.get()))?,
        };

        row_to_record(row)
    }

    async fn find_by_id(
        &self,
        id: RecordId,
    ) -> Result<Option<FeedingRecord>, FeedingRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<FeedingRecordRow> = feeding_records::table
            .find(id.get())
            .select(FeedingRecordRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn find_all(&self) -> Result<Vec<FeedingRecord>, FeedingRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FeedingRecordRow> = feeding_records::table
            .order(feeding_records::id.asc())
            .select(FeedingRecordRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn exists_by_id(&self, id: RecordId) -> Result<bool, FeedingRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(feeding_records::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), FeedingRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(feeding_records::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(record_id = %id, deleted, "feeding record delete executed");
        Ok(())
    }
}
