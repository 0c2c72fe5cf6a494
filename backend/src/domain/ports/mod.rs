//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`FeedingRecordsQuery`], [`FeedingRecordsCommand`]) are
//! consumed by inbound adapters. The driven port
//! [`FeedingRecordRepository`] is implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod feeding_record_repository;
mod feeding_records_command;
mod feeding_records_query;

#[cfg(test)]
pub use feeding_record_repository::MockFeedingRecordRepository;
pub use feeding_record_repository::{FeedingRecordRepository, FeedingRecordRepositoryError};
#[cfg(test)]
pub use feeding_records_command::MockFeedingRecordsCommand;
pub use feeding_records_command::FeedingRecordsCommand;
#[cfg(test)]
pub use feeding_records_query::MockFeedingRecordsQuery;
pub use feeding_records_query::FeedingRecordsQuery;
