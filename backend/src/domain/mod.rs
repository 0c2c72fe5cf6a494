//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed feeding record entities and the service that
//! enforces their rules. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - FeedingRecord and friends: the feeding record aggregate.
//! - FeedingRecordService: implementation of the driving ports.

pub mod error;
pub mod feeding_record;
mod feeding_record_service;
pub mod ports;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feeding_record::{
    CatName, FeedingDetails, FeedingRecord, FeedingRecordDraft, FeedingRecordEntry,
    FeedingRecordValidationError, RecordId, RequiredField,
};
pub use self::feeding_record_service::{FeedingRecordService, record_not_found};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use feeding_log::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(Error::not_found("feeding record 3 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
