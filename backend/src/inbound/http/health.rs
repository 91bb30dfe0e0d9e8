//! Health endpoints: liveness and readiness probes for orchestration.
//!
//! Probes are never cached so load balancers always observe the current
//! state. Responses are documented in OpenAPI via Utoipa.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Shared probe state tracking readiness and liveness.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready once startup has finished.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe. Returns 200 once dependencies are initialised and the
/// server can handle traffic; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while the process is marked alive and 503 once
/// draining. Call [`HealthState::mark_unhealthy`] before graceful shutdown to
/// surface the drain early.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    //! State transitions and probe response shape.

    use actix_web::http::StatusCode;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn state_starts_unready_and_alive() {
        let state = HealthState::new();

        assert!(!state.is_ready());
        assert!(state.is_alive());
    }

    #[rstest]
    fn mark_ready_flips_readiness() {
        let state = HealthState::new();

        state.mark_ready();

        assert!(state.is_ready());
    }

    #[rstest]
    fn mark_unhealthy_fails_liveness() {
        let state = HealthState::new();

        state.mark_unhealthy();

        assert!(!state.is_alive());
    }

    #[rstest]
    #[case::passing(true, StatusCode::OK)]
    #[case::failing(false, StatusCode::SERVICE_UNAVAILABLE)]
    fn probe_responses_are_uncached(#[case] probe_ok: bool, #[case] expected: StatusCode) {
        let response = HealthState::probe_response(probe_ok);

        assert_eq!(response.status(), expected);
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .expect("probes set Cache-Control");
        assert_eq!(cache_control, "no-store");
    }
}
