//! Token auth: signed, short-lived credentials carrying the caller's email.

pub mod domain;
pub mod errors;
pub mod token;

pub use token::TokenService;
