use std::sync::Arc;

use service::{auth::TokenService, booking::BookingService, catalog::CatalogService};

/// Shared handler state. Everything behind an `Arc`, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub catalog: Arc<CatalogService>,
    pub bookings: Arc<BookingService>,
    pub cookie_secure: bool,
}
