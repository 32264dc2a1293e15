//! Booking workflow: repository abstraction plus the service enforcing
//! validation and the owner-only listing rule.

pub mod repository;
pub mod service;

pub use service::BookingService;
