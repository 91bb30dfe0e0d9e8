//! Shared mapping from pool and Diesel failures to port error constructors.
//!
//! Both repositories surface the same two failure shapes: "could not reach
//! the database" and "the query itself failed". These helpers capture that
//! mapping once; each repository passes its own constructors in.

use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure into a repository-specific connection error.
pub(super) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Closed connections count as connection failures; everything else,
/// including `NotFound` from `first()` without `.optional()`, counts as a
/// query failure. The original driver message is logged, not returned.
pub(super) fn map_diesel_error<E>(
    error: diesel::result::Error,
    query: impl Fn(&'static str) -> E,
    connection: impl Fn(&'static str) -> E,
) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}
