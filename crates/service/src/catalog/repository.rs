use async_trait::async_trait;
use models::{
    catalog::{self, ServiceRecord, ServiceSummary},
    db::Store,
};
use mongodb::{bson::oid::ObjectId, Collection};

use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceCatalogRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<ServiceRecord>, ServiceError>;
    async fn get_summary(&self, id: ObjectId) -> Result<Option<ServiceSummary>, ServiceError>;
}

/// MongoDB-backed catalog.
pub struct MongoServiceCatalog {
    pub collection: Collection<ServiceRecord>,
}

impl MongoServiceCatalog {
    pub fn new(store: &Store) -> Self {
        Self { collection: store.services() }
    }
}

#[async_trait]
impl ServiceCatalogRepository for MongoServiceCatalog {
    async fn list_all(&self) -> Result<Vec<ServiceRecord>, ServiceError> {
        Ok(catalog::list_all(&self.collection).await?)
    }

    async fn get_summary(&self, id: ObjectId) -> Result<Option<ServiceSummary>, ServiceError> {
        Ok(catalog::find_summary(&self.collection, id).await?)
    }
}

/// In-memory catalog for tests and local runs without a database.
pub mod mock {
    use super::*;

    #[derive(Default)]
    pub struct MockServiceCatalog {
        records: Vec<ServiceRecord>,
    }

    impl MockServiceCatalog {
        pub fn new(records: Vec<ServiceRecord>) -> Self {
            Self { records }
        }
    }

    #[async_trait]
    impl ServiceCatalogRepository for MockServiceCatalog {
        async fn list_all(&self) -> Result<Vec<ServiceRecord>, ServiceError> {
            Ok(self.records.clone())
        }

        async fn get_summary(&self, id: ObjectId) -> Result<Option<ServiceSummary>, ServiceError> {
            Ok(self.records.iter().find(|r| r.id == id).map(ServiceSummary::from))
        }
    }
}
