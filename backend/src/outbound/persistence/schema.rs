//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Events owned by the wider system.
    ///
    /// This service only reads the table to verify an event exists before
    /// touching its persons.
    events (id) {
        /// Primary key: database-generated 64-bit identifier.
        id -> Int8,
        /// Human-readable event title.
        title -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Persons recorded for an event.
    persons (id) {
        /// Primary key: database-generated 64-bit identifier.
        id -> Int8,
        /// Owning event (foreign key to `events.id`).
        event_id -> Int8,
        /// Attendee name (max 120 characters).
        name -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
