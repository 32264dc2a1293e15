use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod auth;
pub mod bookings;
pub mod services;

pub const LIVENESS_TEXT: &str = "Car Doctor Server is running successfully.";

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Liveness text", body = String)))]
pub async fn root() -> &'static str {
    LIVENESS_TEXT
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router. Only the booking listing sits behind
/// the token guard.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/jwt", post(auth::issue_token))
        .route("/logout", post(auth::logout))
        .route("/services", get(services::list_services))
        .route("/services/:id", get(services::get_service))
        .route("/bookings", post(bookings::create_booking))
        .route(
            "/bookings/:id",
            patch(bookings::update_booking).delete(bookings::delete_booking),
        );

    let guarded = Router::new()
        .route("/bookings", get(bookings::list_bookings))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    public
        .merge(guarded)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
