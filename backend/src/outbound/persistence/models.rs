//! Internal Diesel row structs for the `feeding_records` table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, NaiveTime, Utc};
use diesel::prelude::*;

use super::schema::feeding_records;

/// Row read from `feeding_records`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feeding_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeedingRecordRow {
    pub id: i64,
    pub cat_name: String,
    pub feeding_time: NaiveTime,
    pub food_type: Option<String>,
    pub caretaker: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insertable row; the id comes from the `BIGSERIAL` sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feeding_records)]
pub(crate) struct NewFeedingRecordRow<'a> {
    pub cat_name: &'a str,
    pub feeding_time: NaiveTime,
    pub food_type: Option<&'a str>,
    pub caretaker: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

/// Changeset replacing the caller-controlled columns.
///
/// `treat_none_as_null` so clearing an optional field clears the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = feeding_records)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct FeedingRecordChangeset<'a> {
    pub cat_name: &'a str,
    pub feeding_time: NaiveTime,
    pub food_type: Option<&'a str>,
    pub caretaker: Option<&'a str>,
}
