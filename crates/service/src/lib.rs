//! Service layer: token issuance, the service catalog and the booking workflow.
//! - Repositories are traits with a MongoDB implementation and an in-memory mock.
//! - Services own id parsing, validation and the ownership rule.
//! - Every operation returns `Result<T, ServiceError>`.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod errors;
