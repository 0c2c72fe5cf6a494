//! HTTP inbound adapter serving the feeding record pages.

pub mod error;
pub mod feeding_records;
pub mod forms;
pub mod health;
pub mod state;
pub mod views;

pub use error::ApiResult;
