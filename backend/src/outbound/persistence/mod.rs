//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the feeding record store backed by PostgreSQL
//! via Diesel with async support through `diesel-async` and `bb8` pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel failures map to
//!   `FeedingRecordRepositoryError` variants.
//!
//! # Example
//!
//! ```no_run
//! use feeding_log::outbound::persistence::{
//!     DbPool, DieselFeedingRecordRepository, PoolConfig, run_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/feeding";
//! run_migrations(url.to_owned()).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselFeedingRecordRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_feeding_record_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_feeding_record_repository::DieselFeedingRecordRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
