//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements for
//! queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{events, persons};

/// Row struct for reading from the events table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Row struct for reading from the persons table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new person records.
///
/// `id` and `created_at` are filled in by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = persons)]
pub(crate) struct NewPersonRow<'a> {
    pub event_id: i64,
    pub name: &'a str,
}
