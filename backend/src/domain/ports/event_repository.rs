//! Port for event lookups.
//!
//! The existence check that guards every person operation goes through this
//! port. `Ok(Some)`, `Ok(None)` and `Err` deliberately keep "the event does
//! not exist" apart from "the lookup itself failed" so call sites can map
//! the two to different responses.

use async_trait::async_trait;

use crate::domain::{Event, EventId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by event repository adapters.
    pub enum EventRepositoryError {
        /// Repository connection could not be established.
        Connection => "event repository connection failed: {message}",
        /// Lookup query failed during execution.
        Query => "event repository query failed: {message}",
    }
}

/// Port for reading events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fetch an event by identifier.
    ///
    /// Returns `Ok(None)` when no row matches; errors are reserved for
    /// failures of the lookup itself.
    async fn find_by_id(
        &self,
        event_id: EventId,
    ) -> Result<Option<Event>, EventRepositoryError>;
}

/// Fixture implementation for running without a real database.
///
/// Knows no events, so every lookup answers `Ok(None)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventRepository;

#[async_trait]
impl EventRepository for FixtureEventRepository {
    async fn find_by_id(
        &self,
        _event_id: EventId,
    ) -> Result<Option<Event>, EventRepositoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_repository_knows_no_events() {
        let repo = FixtureEventRepository;
        let found = repo
            .find_by_id(EventId::new(1))
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[test]
    fn connection_error_formats_with_message() {
        let error = EventRepositoryError::connection("pool exhausted");
        assert_eq!(
            error.to_string(),
            "event repository connection failed: pool exhausted"
        );
    }

    #[test]
    fn query_error_formats_with_message() {
        let error = EventRepositoryError::query("relation missing");
        assert_eq!(
            error.to_string(),
            "event repository query failed: relation missing"
        );
    }
}
