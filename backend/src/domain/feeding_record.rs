//! Feeding record aggregate.
//!
//! A feeding record says which cat is fed at what time of day, with what food
//! and by whom. Callers submit a [`FeedingRecordDraft`] whose fields may be
//! missing; [`FeedingRecordDraft::validate`] turns it into [`FeedingDetails`],
//! the validated, mutable part of a [`FeedingRecord`]. The identifier and the
//! creation timestamp are never supplied by callers.

use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a feeding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw identifier produced by a store or parsed from a path.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Required field that was missing or blank in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// The cat's name.
    CatName,
    /// The time of day the cat is fed.
    FeedingTime,
}

impl RequiredField {
    /// Name of the form field carrying this value.
    #[must_use]
    pub fn form_name(self) -> &'static str {
        match self {
            Self::CatName => "nombreGatito",
            Self::FeedingTime => "horaComida",
        }
    }
}

/// Validation errors returned by [`FeedingRecordDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedingRecordValidationError {
    /// One or more required fields were absent or blank.
    #[error("cat name and feeding time are required")]
    MissingRequiredFields(Vec<RequiredField>),
}

impl FeedingRecordValidationError {
    /// Fields that failed validation, in form order.
    #[must_use]
    pub fn fields(&self) -> &[RequiredField] {
        match self {
            Self::MissingRequiredFields(fields) => fields,
        }
    }
}

/// Non-empty, trimmed cat name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CatName(String);

impl CatName {
    /// Validate and construct a cat name, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`FeedingRecordValidationError::MissingRequiredFields`] when the
    /// name is blank.
    ///
    /// # Examples
    /// ```
    /// use feeding_log::domain::CatName;
    ///
    /// let name = CatName::new("  Whiskers ").expect("valid name");
    /// assert_eq!(name.as_ref(), "Whiskers");
    /// assert!(CatName::new("   ").is_err());
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, FeedingRecordValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FeedingRecordValidationError::MissingRequiredFields(vec![
                RequiredField::CatName,
            ]));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CatName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CatName {
    type Error = FeedingRecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CatName> for String {
    fn from(value: CatName) -> Self {
        value.0
    }
}

/// Caller-supplied values for creating or replacing a feeding record.
///
/// Every field is optional so incomplete submissions can reach validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedingRecordDraft {
    /// Name of the cat being fed.
    pub cat_name: Option<String>,
    /// Time of day of the feeding.
    pub feeding_time: Option<NaiveTime>,
    /// Kind of food served.
    pub food_type: Option<String>,
    /// Person responsible for the feeding.
    pub caretaker: Option<String>,
}

impl FeedingRecordDraft {
    /// Check required fields and normalise optional text.
    ///
    /// Blank optional values become `None`; all text is trimmed.
    ///
    /// # Errors
    /// Returns [`FeedingRecordValidationError::MissingRequiredFields`] listing
    /// every required field that is absent or blank.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveTime;
    /// use feeding_log::domain::{FeedingRecordDraft, RequiredField};
    ///
    /// let draft = FeedingRecordDraft {
    ///     cat_name: Some("Whiskers".into()),
    ///     feeding_time: NaiveTime::from_hms_opt(8, 0, 0),
    ///     food_type: Some("  ".into()),
    ///     caretaker: None,
    /// };
    /// let details = draft.validate().expect("valid draft");
    /// assert!(details.food_type.is_none());
    ///
    /// let err = FeedingRecordDraft::default().validate().expect_err("empty draft");
    /// assert_eq!(err.fields(), &[RequiredField::CatName, RequiredField::FeedingTime]);
    /// ```
    pub fn validate(self) -> Result<FeedingDetails, FeedingRecordValidationError> {
        let cat_name = self.cat_name.as_deref().and_then(|raw| CatName::new(raw).ok());

        match (cat_name, self.feeding_time) {
            (Some(cat_name), Some(feeding_time)) => Ok(FeedingDetails {
                cat_name,
                feeding_time,
                food_type: normalise_optional(self.food_type),
                caretaker: normalise_optional(self.caretaker),
            }),
            (cat_name, feeding_time) => {
                let mut missing = Vec::with_capacity(2);
                if cat_name.is_none() {
                    missing.push(RequiredField::CatName);
                }
                if feeding_time.is_none() {
                    missing.push(RequiredField::FeedingTime);
                }
                Err(FeedingRecordValidationError::MissingRequiredFields(missing))
            }
        }
    }
}

fn normalise_optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Validated, caller-controlled fields of a feeding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingDetails {
    /// Name of the cat being fed.
    pub cat_name: CatName,
    /// Time of day of the feeding.
    pub feeding_time: NaiveTime,
    /// Kind of food served.
    pub food_type: Option<String>,
    /// Person responsible for the feeding.
    pub caretaker: Option<String>,
}

/// Persisted feeding record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - `created_at` is stamped once when the record is first saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecord {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Caller-controlled fields.
    #[serde(flatten)]
    pub details: FeedingDetails,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl FeedingRecord {
    /// Replace the caller-controlled fields, keeping identity and creation
    /// time.
    #[must_use]
    pub fn with_details(self, details: FeedingDetails) -> Self {
        Self { details, ..self }
    }
}

/// Record handed to a store for insert-or-replace.
///
/// `id` is `None` for new records; the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedingRecordEntry {
    /// Existing identifier, absent for inserts.
    pub id: Option<RecordId>,
    /// Caller-controlled fields.
    pub details: FeedingDetails,
    /// Creation timestamp; ignored by stores when replacing.
    pub created_at: DateTime<Utc>,
}

impl FeedingRecordEntry {
    /// Entry for a record that has not been stored yet.
    #[must_use]
    pub fn new_record(details: FeedingDetails, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            details,
            created_at,
        }
    }
}

impl From<FeedingRecord> for FeedingRecordEntry {
    fn from(record: FeedingRecord) -> Self {
        Self {
            id: Some(record.id),
            details: record.details,
            created_at: record.created_at,
        }
    }
}
