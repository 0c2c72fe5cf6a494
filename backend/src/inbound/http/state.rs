//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FeedingRecordsCommand, FeedingRecordsQuery};

use super::views::Views;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub records: Arc<dyn FeedingRecordsQuery>,
    pub records_command: Arc<dyn FeedingRecordsCommand>,
    pub views: Arc<Views>,
}

impl HttpState {
    /// Construct state from the driving ports and compiled views.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use feeding_log::domain::FeedingRecordService;
    /// use feeding_log::inbound::http::state::HttpState;
    /// use feeding_log::inbound::http::views::Views;
    /// use feeding_log::outbound::memory::InMemoryFeedingRecordRepository;
    ///
    /// let service = Arc::new(FeedingRecordService::new(
    ///     Arc::new(InMemoryFeedingRecordRepository::default()),
    ///     Arc::new(mockable::DefaultClock),
    /// ));
    /// let views = Views::new().expect("templates compile");
    /// let _state = HttpState::new(service.clone(), service, Arc::new(views));
    /// ```
    pub fn new(
        records: Arc<dyn FeedingRecordsQuery>,
        records_command: Arc<dyn FeedingRecordsCommand>,
        views: Arc<Views>,
    ) -> Self {
        Self {
            records,
            records_command,
            views,
        }
    }
}
