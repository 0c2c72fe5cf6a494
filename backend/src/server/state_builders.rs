//! Builders for HTTP state and the repository-backed service pair.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use feeding_log::domain::FeedingRecordService;
use feeding_log::domain::ports::{
    FeedingRecordRepository, FeedingRecordsCommand, FeedingRecordsQuery,
};
use feeding_log::inbound::http::state::HttpState;
use feeding_log::inbound::http::views::Views;
use feeding_log::outbound::memory::InMemoryFeedingRecordRepository;
use feeding_log::outbound::persistence::{DbPool, DieselFeedingRecordRepository};

use super::ServerConfig;

type ServicePair = (Arc<dyn FeedingRecordsQuery>, Arc<dyn FeedingRecordsCommand>);

fn service_pair<R>(repository: R, clock: Arc<dyn Clock>) -> ServicePair
where
    R: FeedingRecordRepository + 'static,
{
    let service = Arc::new(FeedingRecordService::new(Arc::new(repository), clock));
    (service.clone(), service)
}

/// Build the query/command pair, backed by PostgreSQL when a pool is
/// configured and by process memory otherwise.
fn build_service_pair(pool: Option<&DbPool>, clock: Arc<dyn Clock>) -> ServicePair {
    match pool {
        Some(pool) => {
            info!("storing feeding records in PostgreSQL");
            service_pair(DieselFeedingRecordRepository::new(pool.clone()), clock)
        }
        None => {
            warn!("no database configured; feeding records are kept in memory only");
            service_pair(InMemoryFeedingRecordRepository::default(), clock)
        }
    }
}

/// Build the shared HTTP state for every worker.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the embedded templates fail to compile.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let views = Views::new()
        .map_err(|err| std::io::Error::other(format!("template setup failed: {err}")))?;
    let (records, records_command) =
        build_service_pair(config.db_pool.as_ref(), Arc::new(DefaultClock));
    Ok(web::Data::new(HttpState::new(
        records,
        records_command,
        Arc::new(views),
    )))
}
