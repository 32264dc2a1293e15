use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::{auth::errors::AuthError, errors::ServiceError};
use thiserror::Error;
use tracing::error;

pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access.";
pub const FORBIDDEN_MESSAGE: &str = "forbidden";

/// Maps every `ServiceError` to one status code and body shape.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        Self(e.into())
    }
}

/// Malformed or incomplete request bodies are client validation errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ServiceError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::Unauthenticated(_) => {
                (StatusCode::UNAUTHORIZED, Json(json!({"message": UNAUTHORIZED_MESSAGE}))).into_response()
            }
            ServiceError::Forbidden => {
                (StatusCode::FORBIDDEN, Json(json!({"message": FORBIDDEN_MESSAGE}))).into_response()
            }
            e @ (ServiceError::InvalidArgument(_) | ServiceError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, Json(json!({"error": true, "message": e.to_string()}))).into_response()
            }
            e @ (ServiceError::Db(_) | ServiceError::Token(_)) => {
                let msg = e.to_string();
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": true, "message": msg}))).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unreachable: {0}")]
    Database(String),
}
