//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (persons, health)
//! - **Schemas**: Domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`])
//!   and the response envelope wrappers that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::persons::{CreatePersonRequestBody, PersonResponseBody};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorEnvelopeSchema, ErrorSchema, PersonEnvelopeSchema,
    PersonListEnvelopeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "EventBot backend API",
        description = "HTTP interface for event person registration and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::persons::list_persons,
        crate::inbound::http::persons::create_person,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreatePersonRequestBody,
        PersonResponseBody,
        PersonEnvelopeSchema,
        PersonListEnvelopeSchema,
        ErrorEnvelopeSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "persons", description = "Operations related to event person registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
