//! # filialen-api: Axum API Service for Filialen
//!
//! REST service exposing create, read, update, and delete of branch offices
//! with HAL hypermedia links, field validation, OpenAPI documentation, and
//! CORS.
//!
//! ## API Surface
//!
//! | Path                  | Module                   |
//! |-----------------------|--------------------------|
//! | `/filialen`           | [`routes::filialen`]     |
//! | `/filialen/{id}`      | [`routes::filialen`]     |
//! | `/openapi.json`       | [`openapi`]              |
//! | `/health/*`           | health checks            |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```
//!
//! ## Layering
//!
//! Handlers call [`service::FiliaalService`], which calls a
//! [`repository::FiliaalRepository`]: PostgreSQL via [`db`] when
//! `DATABASE_URL` is set, in-memory otherwise.

pub mod db;
pub mod error;
pub mod extractors;
pub mod hal;
pub mod middleware;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health endpoints (`/health/*`) are mounted outside the CORS layer.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::filialen::router())
        .merge(openapi::router())
        .layer(middleware::cors::layer(&state.config.cors_allowed_origins));

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}

/// Liveness: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness: returns 200 when the backing store answers.
async fn readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.service.health_check().await {
        Ok(()) => (StatusCode::OK, "ready"),
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}
