//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed entities shared by the HTTP and
//! persistence layers. Types stay transport agnostic; invariants and serde
//! contracts are documented on each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode — shared failure payload adapters map to responses.
//! - Event / EventId — parent entity, read-only in this service.
//! - Person / PersonId / PersonName — child entity created and listed here.
//! - TraceId — request-scoped correlation identifier.

pub mod error;
pub mod event;
pub mod person;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::event::{Event, EventId};
pub use self::person::{PERSON_NAME_MAX, Person, PersonId, PersonName, PersonValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
