use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use configs::{AppConfig, CorsConfig};
use models::db::Store;
use service::{
    auth::TokenService,
    booking::{repository::MongoBookingRepository, BookingService},
    catalog::{repository::MongoServiceCatalog, CatalogService},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Single configured origin list, credentials on, so cookies cross from the SPA.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| StartupError::InvalidConfig(format!("bad CORS origin '{o}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Wire repositories and services over an already connected store.
pub fn build_state(store: &Store, cfg: &AppConfig) -> AppState {
    AppState {
        tokens: Arc::new(TokenService::new(&cfg.auth.token_secret, cfg.auth.token_ttl_secs)),
        catalog: Arc::new(CatalogService::new(Arc::new(MongoServiceCatalog::new(store)))),
        bookings: Arc::new(BookingService::new(Arc::new(MongoBookingRepository::new(store)))),
        cookie_secure: cfg.auth.cookie_secure,
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

/// Public entry: connect the store, serve until a shutdown signal, then
/// close the store.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let store = Store::connect(&cfg.database).await.context("connect to mongodb")?;
    store
        .ping()
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!(database = %cfg.database.name, "pinged deployment, mongodb connection ok");

    let cors = build_cors(&cfg.cors)?;
    let app: Router = routes::build_router(build_state(&store, &cfg), cors);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server is running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_rejects_unparseable_origin() {
        let bad = CorsConfig { allowed_origins: vec!["http://ok.test".into(), "bad\norigin".into()] };
        assert!(matches!(build_cors(&bad), Err(StartupError::InvalidConfig(_))));
        assert!(build_cors(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn bind_addr_uses_configured_host_and_port() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 5055;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "127.0.0.1:5055");
    }
}
