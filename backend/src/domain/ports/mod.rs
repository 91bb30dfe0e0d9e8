//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod event_repository;
mod person_repository;

#[cfg(test)]
pub use event_repository::MockEventRepository;
pub use event_repository::{EventRepository, EventRepositoryError, FixtureEventRepository};
#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::{FixturePersonRepository, PersonRepository, PersonRepositoryError};
