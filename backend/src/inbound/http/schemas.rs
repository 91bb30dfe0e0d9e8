//! OpenAPI schema definitions for domain types and response envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

use crate::inbound::http::persons::PersonResponseBody;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A required backing service cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error payload with machine-readable code and human-readable message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Something went wrong")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for the failure envelope wrapping [`ErrorSchema`].
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    /// Envelope discriminator, always `error` for failures.
    #[schema(example = "error")]
    status: String,
    /// The error payload.
    error: ErrorSchema,
}

/// OpenAPI schema for the success envelope around a single person.
#[derive(ToSchema)]
#[schema(as = PersonEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonEnvelopeSchema {
    /// Envelope discriminator, always `ok` for successes.
    #[schema(example = "ok")]
    status: String,
    /// The registered person.
    data: PersonResponseBody,
}

/// OpenAPI schema for the success envelope around a list of persons.
#[derive(ToSchema)]
#[schema(as = PersonListEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonListEnvelopeSchema {
    /// Envelope discriminator, always `ok` for successes.
    #[schema(example = "ok")]
    status: String,
    /// Persons ordered by name, newest identifier first among duplicates.
    data: Vec<PersonResponseBody>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_has_expected_name() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        let name = ErrorCodeSchema::name();
        // utoipa replaces :: with . in schema names
        assert_eq!(name, "crate.domain.ErrorCode");
        assert!(
            schema_json.contains("invalid_request"),
            "schema should contain error code variants"
        );
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert!(
            schema_json.contains("invalid_request"),
            "missing invalid_request"
        );
        assert!(schema_json.contains("not_found"), "missing not_found");
        assert!(
            schema_json.contains("service_unavailable"),
            "missing service_unavailable"
        );
        assert!(
            schema_json.contains("internal_error"),
            "missing internal_error"
        );
    }

    #[test]
    fn error_schema_has_expected_name() {
        let schema_json = schema_to_json::<ErrorSchema>();
        let name = ErrorSchema::name();
        // utoipa replaces :: with . in schema names
        assert_eq!(name, "crate.domain.Error");
        assert!(
            schema_json.contains("message"),
            "schema should contain message field"
        );
        assert!(
            schema_json.contains("trace_id"),
            "schema should contain trace_id field"
        );
    }

    #[test]
    fn envelope_schemas_carry_status_discriminator() {
        let error_envelope = schema_to_json::<ErrorEnvelopeSchema>();
        assert!(
            error_envelope.contains("status"),
            "error envelope should contain status field"
        );

        let person_envelope = schema_to_json::<PersonEnvelopeSchema>();
        assert!(
            person_envelope.contains("status"),
            "person envelope should contain status field"
        );

        let list_envelope = schema_to_json::<PersonListEnvelopeSchema>();
        assert!(
            list_envelope.contains("data"),
            "list envelope should contain data field"
        );
    }

    #[test]
    fn person_envelope_schemas_have_expected_names() {
        assert_eq!(PersonEnvelopeSchema::name(), "PersonEnvelope");
        assert_eq!(PersonListEnvelopeSchema::name(), "PersonListEnvelope");
        assert_eq!(ErrorEnvelopeSchema::name(), "ErrorEnvelope");
    }
}
