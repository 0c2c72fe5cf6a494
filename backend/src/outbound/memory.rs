//! Process-local feeding record store.
//!
//! Used when no database URL is configured and by integration tests.
//! Identifiers come from a monotonic counter and are never reused, matching
//! the PostgreSQL sequence.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{FeedingRecordRepository, FeedingRecordRepositoryError};
use crate::domain::{FeedingRecord, FeedingRecordEntry, RecordId};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    records: BTreeMap<RecordId, FeedingRecord>,
}

/// In-memory implementation of the `FeedingRecordRepository` port.
///
/// # Examples
/// ```
/// use feeding_log::domain::ports::FeedingRecordRepository;
/// use feeding_log::domain::RecordId;
/// use feeding_log::outbound::memory::InMemoryFeedingRecordRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryFeedingRecordRepository::default();
/// assert!(repo.find_all().await.expect("list").is_empty());
/// assert!(!repo.exists_by_id(RecordId::new(1)).await.expect("exists"));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryFeedingRecordRepository {
    store: Mutex<Store>,
}

#[async_trait]
impl FeedingRecordRepository for InMemoryFeedingRecordRepository {
    async fn save(
        &self,
        entry: &FeedingRecordEntry,
    ) -> Result<FeedingRecord, FeedingRecordRepositoryError> {
        let mut store = self.store.lock().await;

        let record = match entry.id {
            None => {
                store.last_id += 1;
                FeedingRecord {
                    id: RecordId::new(store.last_id),
                    details: entry.details.clone(),
                    created_at: entry.created_at,
                }
            }
            Some(id) => store
                .records
                .get(&id)
                .cloned()
                .ok_or_else(|| FeedingRecordRepositoryError::missing(id.get()))?
                .with_details(entry.details.clone()),
        };

        store.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(
        &self,
        id: RecordId,
    ) -> Result<Option<FeedingRecord>, FeedingRecordRepositoryError> {
        Ok(self.store.lock().await.records.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<FeedingRecord>, FeedingRecordRepositoryError> {
        Ok(self.store.lock().await.records.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: RecordId) -> Result<bool, FeedingRecordRepositoryError> {
        Ok(self.store.lock().await.records.contains_key(&id))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), FeedingRecordRepositoryError> {
        self.store.lock().await.records.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeedingDetails, FeedingRecordDraft};
    use chrono::{NaiveTime, TimeZone, Utc};
    use rstest::{fixture, rstest};

    fn details(cat: &str, hour: u32) -> FeedingDetails {
        FeedingRecordDraft {
            cat_name: Some(cat.to_owned()),
            feeding_time: NaiveTime::from_hms_opt(hour, 0, 0),
            ..FeedingRecordDraft::default()
        }
        .validate()
        .expect("valid draft")
    }

    #[fixture]
    fn repo() -> InMemoryFeedingRecordRepository {
        InMemoryFeedingRecordRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn inserts_assign_increasing_ids(repo: InMemoryFeedingRecordRepository) {
        let now = Utc::now();
        let first = repo
            .save(&FeedingRecordEntry::new_record(details("Whiskers", 8), now))
            .await
            .expect("first insert");
        let second = repo
            .save(&FeedingRecordEntry::new_record(details("Misu", 9), now))
            .await
            .expect("second insert");

        assert_eq!(first.id, RecordId::new(1));
        assert_eq!(second.id, RecordId::new(2));
        let all = repo.find_all().await.expect("list");
        assert_eq!(all, vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryFeedingRecordRepository) {
        let now = Utc::now();
        let first = repo
            .save(&FeedingRecordEntry::new_record(details("Whiskers", 8), now))
            .await
            .expect("insert");
        repo.delete_by_id(first.id).await.expect("delete");

        let next = repo
            .save(&FeedingRecordEntry::new_record(details("Misu", 9), now))
            .await
            .expect("insert");

        assert_eq!(next.id, RecordId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn replacement_keeps_the_stored_creation_time(repo: InMemoryFeedingRecordRepository) {
        let created_at = Utc
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");
        let record = repo
            .save(&FeedingRecordEntry::new_record(details("Whiskers", 8), created_at))
            .await
            .expect("insert");

        let replacement = FeedingRecordEntry {
            id: Some(record.id),
            details: details("Whiskers", 20),
            created_at: Utc::now(),
        };
        let updated = repo.save(&replacement).await.expect("replace");

        assert_eq!(updated.created_at, created_at);
        assert_eq!(
            updated.details.feeding_time,
            NaiveTime::from_hms_opt(20, 0, 0).expect("valid time")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn replacing_an_absent_record_reports_missing(repo: InMemoryFeedingRecordRepository) {
        let entry = FeedingRecordEntry {
            id: Some(RecordId::new(9)),
            details: details("Ghost", 1),
            created_at: Utc::now(),
        };

        let err = repo.save(&entry).await.expect_err("missing");
        assert_eq!(err, FeedingRecordRepositoryError::missing(9_i64));
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_an_absent_record_is_silent(repo: InMemoryFeedingRecordRepository) {
        repo.delete_by_id(RecordId::new(3))
            .await
            .expect("silent delete");
        assert!(!repo.exists_by_id(RecordId::new(3)).await.expect("exists"));
    }
}
