//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.
//!
//! This adapter answers event existence lookups for the HTTP layer. A lookup
//! distinguishes "no such row" from infrastructure failure so callers can map
//! each outcome to its own response.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Event, EventId};

use super::diesel_errors;
use super::models::EventRow;
use super::pool::{DbPool, PoolError};
use super::schema::events;

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> EventRepositoryError {
    diesel_errors::map_pool_error(error, |message| EventRepositoryError::connection(message))
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    diesel_errors::map_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

/// Convert a database row into a domain event.
fn row_to_event(row: EventRow) -> Event {
    let EventRow {
        id,
        title,
        created_at,
    } = row;

    Event {
        id: EventId::new(id),
        title,
        created_at,
    }
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn find_by_id(
        &self,
        event_id: EventId,
    ) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = events::table
            .filter(events::id.eq(event_id.get()))
            .select(EventRow::as_select())
            .first::<EventRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_event))
    }
}
