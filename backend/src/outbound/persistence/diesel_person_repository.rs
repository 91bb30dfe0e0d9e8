//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.
//!
//! Listing returns attendees ordered by name, with newest id first among
//! duplicates. Creation runs in a single transaction: insert the row, read it
//! back by the returned id, and convert it into a validated domain person.
//! Any failure inside the transaction rolls the insert back and surfaces as a
//! single "not created" error.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{PersonRepository, PersonRepositoryError};
use crate::domain::{EventId, Person, PersonId, PersonName, PersonValidationError};

use super::diesel_errors;
use super::models::{NewPersonRow, PersonRow};
use super::pool::{DbPool, PoolError};
use super::schema::persons;

/// Diesel-backed implementation of the person repository port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use eventbot_backend::outbound::persistence::{
    ///     DbPool, DieselPersonRepository, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost")).await?;
    /// let repository = DieselPersonRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    diesel_errors::map_pool_error(error, |message| PersonRepositoryError::connection(message))
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> PersonRepositoryError {
    diesel_errors::map_diesel_error(
        error,
        PersonRepositoryError::query,
        PersonRepositoryError::connection,
    )
}

/// Failure modes inside the creation transaction.
///
/// Every variant aborts the transaction, rolling the insert back.
#[derive(Debug)]
enum CreateTxError {
    Diesel(diesel::result::Error),
    RowMissing { id: i64 },
    InvalidRow(PersonValidationError),
}

impl From<diesel::result::Error> for CreateTxError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

/// Collapse transaction failures into a single "not created" repository error.
fn map_create_error(error: CreateTxError) -> PersonRepositoryError {
    match error {
        CreateTxError::Diesel(err) => {
            debug!(error = %err, "person creation transaction failed");
            PersonRepositoryError::not_created("database error")
        }
        CreateTxError::RowMissing { id } => {
            debug!(id, "inserted person row missing on read-back");
            PersonRepositoryError::not_created("inserted row missing on read-back")
        }
        CreateTxError::InvalidRow(err) => {
            debug!(error = %err, "inserted person row failed validation");
            PersonRepositoryError::not_created("inserted row failed validation")
        }
    }
}

/// Convert a database row into a validated domain person.
fn row_to_person(row: PersonRow) -> Result<Person, PersonValidationError> {
    let PersonRow {
        id,
        event_id,
        name,
        created_at,
    } = row;

    Ok(Person {
        id: PersonId::new(id),
        event_id: EventId::new(event_id),
        name: PersonName::new(name)?,
        created_at,
    })
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn list_for_event(
        &self,
        event_id: EventId,
    ) -> Result<Vec<Person>, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PersonRow> = persons::table
            .filter(persons::event_id.eq(event_id.get()))
            .order((persons::name.asc(), persons::id.desc()))
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| {
                row_to_person(row).map_err(|err| PersonRepositoryError::query(err.to_string()))
            })
            .collect()
    }

    async fn create(
        &self,
        event_id: EventId,
        name: &PersonName,
    ) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPersonRow {
            event_id: event_id.get(),
            name: name.as_str(),
        };

        let person = conn
            .transaction(|conn| {
                async move {
                    let inserted_id = diesel::insert_into(persons::table)
                        .values(&new_row)
                        .returning(persons::id)
                        .get_result::<i64>(conn)
                        .await?;

                    let row = persons::table
                        .filter(persons::id.eq(inserted_id))
                        .select(PersonRow::as_select())
                        .first::<PersonRow>(conn)
                        .await
                        .optional()?
                        .ok_or(CreateTxError::RowMissing { id: inserted_id })?;

                    row_to_person(row).map_err(CreateTxError::InvalidRow)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_create_error)?;

        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_row() -> PersonRow {
        PersonRow {
            id: 5,
            event_id: 7,
            name: "Ann".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let repo_err = map_pool_error(pool_err);

        assert!(matches!(repo_err, PersonRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let diesel_err = diesel::result::Error::NotFound;
        let repo_err = map_diesel_error(diesel_err);

        assert!(matches!(repo_err, PersonRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    #[case::database(CreateTxError::Diesel(diesel::result::Error::RollbackTransaction))]
    #[case::missing_row(CreateTxError::RowMissing { id: 9 })]
    #[case::invalid_row(CreateTxError::InvalidRow(PersonValidationError::EmptyName))]
    fn transaction_failures_collapse_to_not_created(#[case] error: CreateTxError) {
        let repo_err = map_create_error(error);

        assert!(matches!(repo_err, PersonRepositoryError::NotCreated { .. }));
    }

    #[rstest]
    fn row_conversion_preserves_fields(valid_row: PersonRow) {
        let created_at = valid_row.created_at;

        let person = row_to_person(valid_row).expect("valid row should convert");

        assert_eq!(person.id, PersonId::new(5));
        assert_eq!(person.event_id, EventId::new(7));
        assert_eq!(person.name.as_str(), "Ann");
        assert_eq!(person.created_at, created_at);
    }

    #[rstest]
    fn row_conversion_rejects_blank_name(mut valid_row: PersonRow) {
        valid_row.name = "   ".to_owned();

        let error = row_to_person(valid_row).expect_err("blank name should fail");
        assert!(matches!(error, PersonValidationError::EmptyName));
    }
}
