//! Backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds transport-agnostic
//! types and ports, [`inbound`] adapts HTTP requests onto them, and
//! [`outbound`] implements the ports against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
