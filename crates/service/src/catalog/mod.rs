//! Read-only access to the `services` collection.

pub mod repository;
pub mod service;

pub use service::CatalogService;
