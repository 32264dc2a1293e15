use std::sync::Arc;

use models::{
    catalog::{ServiceRecord, ServiceSummary},
    ids::parse_object_id,
};
use tracing::instrument;

use super::repository::ServiceCatalogRepository;
use crate::errors::ServiceError;

pub struct CatalogService {
    repo: Arc<dyn ServiceCatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ServiceCatalogRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<ServiceRecord>, ServiceError> {
        self.repo.list_all().await
    }

    /// `Ok(None)` when the id is well formed but nothing matches.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<ServiceSummary>, ServiceError> {
        let oid = parse_object_id(id)?;
        self.repo.get_summary(oid).await
    }
}
