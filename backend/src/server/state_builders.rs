//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use eventbot_backend::domain::ports::{
    EventRepository, FixtureEventRepository, FixturePersonRepository, PersonRepository,
};
use eventbot_backend::inbound::http::state::HttpState;
use eventbot_backend::outbound::persistence::{DieselEventRepository, DieselPersonRepository};

use super::ServerConfig;

/// Select event and person ports: database-backed repositories when a pool is
/// configured, fixtures otherwise.
fn build_repositories(
    config: &ServerConfig,
) -> (Arc<dyn EventRepository>, Arc<dyn PersonRepository>) {
    match &config.db_pool {
        Some(pool) => (
            Arc::new(DieselEventRepository::new(pool.clone())),
            Arc::new(DieselPersonRepository::new(pool.clone())),
        ),
        None => (
            Arc::new(FixtureEventRepository),
            Arc::new(FixturePersonRepository),
        ),
    }
}

/// Build the shared HTTP state from configured ports and fixture fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (events, persons) = build_repositories(config);
    web::Data::new(HttpState::new(events, persons))
}
