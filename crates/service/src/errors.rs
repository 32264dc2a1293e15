use models::errors::ModelError;
use thiserror::Error;

use crate::auth::errors::AuthError;

/// Single error contract for every catalog, booking and token operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("forbidden")]
    Forbidden,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("token error: {0}")]
    Token(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::InvalidId(raw) => Self::InvalidArgument(format!("malformed identifier '{raw}'")),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthenticated(msg) => Self::Unauthenticated(msg),
            AuthError::TokenError(msg) => Self::Token(msg),
        }
    }
}
