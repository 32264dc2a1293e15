use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid identifier: {0}")]
    InvalidId(String),
    #[error("database error: {0}")]
    Db(String),
}

pub(crate) fn db_err(e: mongodb::error::Error) -> ModelError {
    ModelError::Db(e.to_string())
}
