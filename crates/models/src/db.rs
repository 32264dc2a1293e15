use std::time::Duration;

use configs::DatabaseConfig;
use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};
use tracing::info;

use crate::booking::{self, BookingRecord};
use crate::catalog::{self, ServiceRecord};
use crate::errors::{db_err, ModelError};

/// Owns the driver client for the lifetime of the process.
///
/// Built once at startup and handed to the repositories; the driver pools
/// connections internally so clones are cheap.
#[derive(Clone, Debug)]
pub struct Store {
    client: Client,
    db: Database,
}

impl Store {
    pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(cfg.connection_uri()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
        options.connect_timeout = Some(Duration::from_secs(cfg.connect_timeout_secs));
        options.app_name = Some("car-doctor".to_string());
        let client = Client::with_options(options)?;
        let db = client.database(&cfg.name);
        info!(database = %cfg.name, "mongodb client created");
        Ok(Self { client, db })
    }

    /// Round-trip to the server; used at startup to fail fast on bad credentials.
    pub async fn ping(&self) -> Result<(), ModelError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    pub fn services(&self) -> Collection<ServiceRecord> {
        self.db.collection(catalog::COLLECTION)
    }

    pub fn bookings(&self) -> Collection<BookingRecord> {
        self.db.collection(booking::COLLECTION)
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("mongodb client shut down");
    }
}
