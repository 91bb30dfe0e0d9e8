//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    EventRepository, FixtureEventRepository, FixturePersonRepository, PersonRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub events: Arc<dyn EventRepository>,
    pub persons: Arc<dyn PersonRepository>,
}

impl HttpState {
    /// Construct state from the event and person repository ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use eventbot_backend::domain::ports::{FixtureEventRepository, FixturePersonRepository};
    /// use eventbot_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureEventRepository),
    ///     Arc::new(FixturePersonRepository),
    /// );
    /// let _events = state.events.clone();
    /// ```
    pub fn new(events: Arc<dyn EventRepository>, persons: Arc<dyn PersonRepository>) -> Self {
        Self { events, persons }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureEventRepository),
            Arc::new(FixturePersonRepository),
        )
    }
}
