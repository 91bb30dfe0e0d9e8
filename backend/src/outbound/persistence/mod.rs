//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   repository error types.
//!
//! # Example
//!
//! ```ignore
//! use eventbot_backend::outbound::persistence::{DbPool, PoolConfig, DieselEventRepository};
//!
//! let config = PoolConfig::new("postgres://localhost/eventbot");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselEventRepository::new(pool);
//! ```

mod diesel_errors;
mod diesel_event_repository;
mod diesel_person_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_event_repository::DieselEventRepository;
pub use diesel_person_repository::DieselPersonRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
