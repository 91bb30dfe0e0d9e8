//! Embedded Diesel migrations applied at startup.
//!
//! The migration SQL under `backend/migrations` is compiled into the binary,
//! so deployments never depend on a migrations directory being present at
//! runtime. Running the harness uses a short-lived synchronous connection;
//! callers on an async runtime should wrap [`run_pending_migrations`] in
//! `spawn_blocking`.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// All migrations shipped with this crate.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors that can occur while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// Failed to establish the synchronous migration connection.
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },

    /// Applying one or more pending migrations failed.
    #[error("failed to apply migrations: {message}")]
    Migration { message: String },
}

impl MigrationError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a migration error with the given message.
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration {
            message: message.into(),
        }
    }
}

/// Apply all pending embedded migrations for the given database.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut connection = PgConnection::establish(database_url)
        .map_err(|error| MigrationError::connection(error.to_string()))?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|error| MigrationError::migration(error.to_string()))?;
    Ok(())
}
