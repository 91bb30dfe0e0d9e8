//! Port for person listing and creation.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{EventId, Person, PersonId, PersonName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by person repository adapters.
    pub enum PersonRepositoryError {
        /// Repository connection could not be established.
        Connection => "person repository connection failed: {message}",
        /// Query failed during execution.
        Query => "person repository query failed: {message}",
        /// The insert-and-refetch sequence did not produce a row.
        NotCreated => "person not created: {message}",
    }
}

/// Port for person storage and retrieval.
///
/// `create` runs insert and re-fetch inside one transaction: the returned
/// [`Person`] is the stored row read back within the same scope, and any
/// failure along the way rolls the insert back and surfaces as
/// [`PersonRepositoryError::NotCreated`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Fetch every person recorded for the event, ordered by name ascending
    /// with id descending as the tie-break.
    async fn list_for_event(
        &self,
        event_id: EventId,
    ) -> Result<Vec<Person>, PersonRepositoryError>;

    /// Insert a person under the event and return the stored row.
    async fn create(
        &self,
        event_id: EventId,
        name: &PersonName,
    ) -> Result<Person, PersonRepositoryError>;
}

/// Fixture implementation for running without a real database.
///
/// Lookups answer empty; writes are discarded and echoed back with a
/// placeholder id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePersonRepository;

#[async_trait]
impl PersonRepository for FixturePersonRepository {
    async fn list_for_event(
        &self,
        _event_id: EventId,
    ) -> Result<Vec<Person>, PersonRepositoryError> {
        Ok(Vec::new())
    }

    async fn create(
        &self,
        event_id: EventId,
        name: &PersonName,
    ) -> Result<Person, PersonRepositoryError> {
        Ok(Person {
            id: PersonId::new(0),
            event_id,
            name: name.clone(),
            created_at: Utc::now(),
        })
    }
}
