//! Feeding log library modules.
//!
//! Records when each cat was fed, by whom and with what. The domain layer
//! owns validation and timestamps; `inbound::http` renders HTML pages and
//! `outbound` stores records in PostgreSQL or process memory.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
