//! Tests for the backend application bootstrap, covering metrics
//! initialisation and readiness signalling.

use std::net::SocketAddr;

use actix_web::web;
use rstest::{fixture, rstest};

#[cfg(feature = "metrics")]
use super::initialize_metrics;
use crate::server::{ServerConfig, create_server};
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use eventbot_backend::inbound::http::health::HealthState;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_address() -> SocketAddr {
    ([127, 0, 0, 1], 0).into()
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_none_on_error() {
    let metrics = initialize_metrics(|| -> Result<_, &str> { Err("boom") });
    assert!(metrics.is_none(), "expected metrics to be absent on error");
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_metrics_on_success() {
    let metrics = initialize_metrics(|| {
        PrometheusMetricsBuilder::new("test")
            .endpoint("/metrics")
            .build()
    });

    assert!(
        metrics.is_some(),
        "expected metrics to be present on success"
    );
}

#[rstest]
fn server_config_starts_without_database_pool(bind_address: SocketAddr) {
    let config = ServerConfig::new(bind_address);

    assert_eq!(config.bind_addr, bind_address);
    assert!(
        config.db_pool.is_none(),
        "a fresh config should fall back to fixture repositories"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, bind_address: SocketAddr) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), ServerConfig::new(bind_address))
        .expect("server should build without a database pool");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[cfg(feature = "metrics")]
#[fixture]
fn prometheus_metrics() -> actix_web_prom::PrometheusMetrics {
    PrometheusMetricsBuilder::new("test")
        .endpoint("/metrics")
        .build()
        .expect("metrics should build for tests")
}

#[cfg(feature = "metrics")]
#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready_with_metrics(
    health_state: web::Data<HealthState>,
    bind_address: SocketAddr,
    prometheus_metrics: actix_web_prom::PrometheusMetrics,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(bind_address).with_metrics(Some(prometheus_metrics));
    let _server =
        create_server(health_state.clone(), config).expect("server should build with metrics");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}
