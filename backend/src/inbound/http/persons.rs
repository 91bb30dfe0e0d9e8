//! Person registration HTTP handlers.
//!
//! ```text
//! GET /events/{event_id}/persons
//! POST /events/{event_id}/persons {"name":"Carol"}
//! ```
//!
//! Both endpoints resolve the event named in the path before touching person
//! data. Any identifier that does not resolve to a stored event, including
//! one that is not an integer at all, produces the same 404 response.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{EventRepositoryError, PersonRepositoryError};
use crate::domain::{Error, EventId, Person, PersonName, PersonValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::OkEnvelope;
use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, PersonEnvelopeSchema, PersonListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, empty_field_error, missing_field_error, value_too_long_error,
};

#[derive(Debug, Deserialize)]
struct EventPath {
    event_id: String,
}

/// Request payload for registering a person.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePersonRequestBody {
    /// Display name for the person.
    #[schema(example = "Carol")]
    pub name: Option<String>,
}

/// Person payload returned by the list and create endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonResponseBody {
    /// Stable person identifier.
    #[schema(example = 5)]
    pub id: i64,
    /// Identifier of the event the person registered for.
    #[schema(example = 7)]
    pub event_id: i64,
    /// Validated display name.
    #[schema(example = "Carol")]
    pub name: String,
    /// Registration time as an RFC 3339 timestamp.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Person> for PersonResponseBody {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.get(),
            event_id: person.event_id.get(),
            name: person.name.into(),
            created_at: person.created_at.to_rfc3339(),
        }
    }
}

fn event_not_found() -> Error {
    Error::not_found("Event not found")
}

fn parse_person_name(payload: CreatePersonRequestBody) -> Result<PersonName, Error> {
    let field = FieldName::new("name");
    let Some(name) = payload.name else {
        return Err(missing_field_error(field));
    };

    PersonName::new(name.as_str()).map_err(|err| match err {
        PersonValidationError::EmptyName => empty_field_error(field),
        PersonValidationError::NameTooLong { max } => value_too_long_error(field, max),
    })
}

fn map_event_lookup_error(error: EventRepositoryError) -> Error {
    match error {
        EventRepositoryError::Connection { .. } => {
            Error::service_unavailable("event lookup unavailable")
        }
        EventRepositoryError::Query { .. } => Error::internal(error.to_string()),
    }
}

fn map_person_repository_error(error: PersonRepositoryError) -> Error {
    match error {
        PersonRepositoryError::Connection { .. } => {
            Error::service_unavailable("person registry unavailable")
        }
        PersonRepositoryError::Query { .. } | PersonRepositoryError::NotCreated { .. } => {
            Error::internal(error.to_string())
        }
    }
}

/// Resolve the event named in the path, mapping every miss to the same
/// "Event not found" response. Identifiers that fail to parse are treated as
/// nonexistent events rather than validation failures.
async fn require_event(state: &HttpState, raw_event_id: &str) -> Result<EventId, Error> {
    let Ok(event_id) = raw_event_id.parse::<EventId>() else {
        return Err(event_not_found());
    };

    let event = state
        .events
        .find_by_id(event_id)
        .await
        .map_err(map_event_lookup_error)?;

    event.map(|_| event_id).ok_or_else(event_not_found)
}

/// List the persons registered for an event.
///
/// Persons are ordered by name, with the most recently assigned identifier
/// first among persons sharing a name.
#[utoipa::path(
    get,
    path = "/events/{event_id}/persons",
    params(
        ("event_id" = i64, Path, description = "Event identifier")
    ),
    responses(
        (status = 200, description = "Persons registered for the event", body = PersonListEnvelopeSchema),
        (status = 404, description = "Event not found", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema),
        (status = 503, description = "Service unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["persons"],
    operation_id = "listEventPersons"
)]
#[get("/events/{event_id}/persons")]
pub async fn list_persons(
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
) -> ApiResult<web::Json<OkEnvelope<Vec<PersonResponseBody>>>> {
    let EventPath { event_id } = path.into_inner();
    let event_id = require_event(&state, &event_id).await?;

    let persons = state
        .persons
        .list_for_event(event_id)
        .await
        .map_err(map_person_repository_error)?;

    let body: Vec<PersonResponseBody> = persons.into_iter().map(PersonResponseBody::from).collect();
    Ok(web::Json(OkEnvelope::new(body)))
}

/// Register a person for an event.
///
/// The name is validated before any database work so malformed requests fail
/// fast. Creation itself runs atomically behind the repository port.
#[utoipa::path(
    post,
    path = "/events/{event_id}/persons",
    request_body = CreatePersonRequestBody,
    params(
        ("event_id" = i64, Path, description = "Event identifier")
    ),
    responses(
        (status = 201, description = "Person registered", body = PersonEnvelopeSchema),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 404, description = "Event not found", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema),
        (status = 503, description = "Service unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["persons"],
    operation_id = "createEventPerson"
)]
#[post("/events/{event_id}/persons")]
pub async fn create_person(
    state: web::Data<HttpState>,
    path: web::Path<EventPath>,
    payload: web::Json<CreatePersonRequestBody>,
) -> ApiResult<HttpResponse> {
    let name = parse_person_name(payload.into_inner())?;
    let EventPath { event_id } = path.into_inner();
    let event_id = require_event(&state, &event_id).await?;

    let person = state
        .persons
        .create(event_id, &name)
        .await
        .map_err(map_person_repository_error)?;

    Ok(HttpResponse::Created().json(OkEnvelope::new(PersonResponseBody::from(person))))
}

#[cfg(test)]
#[path = "persons_tests.rs"]
mod tests;
