//! Response envelopes shared by all HTTP handlers.
//!
//! Success payloads travel as `{"status": "ok", "data": ...}` and failures as
//! `{"status": "error", "error": {...}}` so clients can branch on `status`
//! before inspecting the payload.

use serde::{Deserialize, Serialize};

use crate::domain::Error;

/// Discriminant for the envelope `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStatus {
    Ok,
    Error,
}

/// Success envelope wrapping a handler payload.
#[derive(Debug, Clone, Serialize)]
pub struct OkEnvelope<T> {
    status: EnvelopeStatus,
    data: T,
}

impl<T: Serialize> OkEnvelope<T> {
    /// Wrap a payload in the success envelope.
    pub fn new(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Ok,
            data,
        }
    }
}

/// Failure envelope wrapping a domain error.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    status: EnvelopeStatus,
    error: &'a Error,
}

impl<'a> ErrorEnvelope<'a> {
    /// Wrap a domain error in the failure envelope.
    pub fn new(error: &'a Error) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Serialization coverage for both envelope shapes.

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn ok_envelope_serializes_with_ok_status() {
        let envelope = OkEnvelope::new(json!({ "id": 5 }));

        let value = serde_json::to_value(&envelope).expect("envelope serialises");

        assert_eq!(value, json!({ "status": "ok", "data": { "id": 5 } }));
    }

    #[rstest]
    fn ok_envelope_preserves_list_payloads() {
        let envelope = OkEnvelope::new(vec![1, 2, 3]);

        let value = serde_json::to_value(&envelope).expect("envelope serialises");

        assert_eq!(value, json!({ "status": "ok", "data": [1, 2, 3] }));
    }

    #[rstest]
    fn error_envelope_serializes_with_error_status() {
        let error = Error::not_found("Event not found");
        let envelope = ErrorEnvelope::new(&error);

        let value = serde_json::to_value(&envelope).expect("envelope serialises");

        assert_eq!(value["status"], "error");
        assert_eq!(value["error"]["code"], "not_found");
        assert_eq!(value["error"]["message"], "Event not found");
    }

    #[rstest]
    fn envelope_status_uses_snake_case() {
        assert_eq!(
            serde_json::to_value(EnvelopeStatus::Ok).expect("status serialises"),
            json!("ok")
        );
        assert_eq!(
            serde_json::to_value(EnvelopeStatus::Error).expect("status serialises"),
            json!("error")
        );
    }
}
