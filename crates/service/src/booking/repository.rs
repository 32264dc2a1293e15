use async_trait::async_trait;
use models::{
    ack::{DeleteAck, InsertAck, UpdateAck},
    booking::{self, BookingRecord, NewBooking},
    db::Store,
};
use mongodb::{bson::oid::ObjectId, Collection};

use crate::errors::ServiceError;

/// Persistence for bookings. Every call is a single unconditional document
/// operation; concurrent writers on one id race at the store.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// `None` or an empty email lists every booking.
    async fn list_by_owner(&self, email: Option<&str>) -> Result<Vec<BookingRecord>, ServiceError>;
    async fn create(&self, booking: NewBooking) -> Result<InsertAck, ServiceError>;
    async fn update_status(&self, id: ObjectId, status: &str) -> Result<UpdateAck, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, ServiceError>;
}

/// MongoDB-backed repository implementation.
pub struct MongoBookingRepository {
    pub collection: Collection<BookingRecord>,
}

impl MongoBookingRepository {
    pub fn new(store: &Store) -> Self {
        Self { collection: store.bookings() }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn list_by_owner(&self, email: Option<&str>) -> Result<Vec<BookingRecord>, ServiceError> {
        Ok(booking::list_by_owner(&self.collection, email).await?)
    }

    async fn create(&self, new: NewBooking) -> Result<InsertAck, ServiceError> {
        Ok(booking::insert(&self.collection, &new).await?)
    }

    async fn update_status(&self, id: ObjectId, status: &str) -> Result<UpdateAck, ServiceError> {
        Ok(booking::update_status(&self.collection, id, status).await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, ServiceError> {
        Ok(booking::delete(&self.collection, id).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockBookingRepository {
        rows: RwLock<Vec<BookingRecord>>,
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn list_by_owner(&self, email: Option<&str>) -> Result<Vec<BookingRecord>, ServiceError> {
            let rows = self.rows.read().await;
            let owner = email.filter(|e| !e.is_empty());
            Ok(rows
                .iter()
                .filter(|r| owner.map_or(true, |e| r.email == e))
                .cloned()
                .collect())
        }

        async fn create(&self, new: NewBooking) -> Result<InsertAck, ServiceError> {
            let id = ObjectId::new();
            self.rows.write().await.push(new.into_record(id));
            Ok(InsertAck::new(id))
        }

        async fn update_status(&self, id: ObjectId, status: &str) -> Result<UpdateAck, ServiceError> {
            let mut rows = self.rows.write().await;
            match rows.iter_mut().find(|r| r.id == id) {
                Some(row) if row.status.as_deref() == Some(status) => Ok(UpdateAck::new(1, 0)),
                Some(row) => {
                    row.status = Some(status.to_string());
                    Ok(UpdateAck::new(1, 1))
                }
                None => Ok(UpdateAck::new(0, 0)),
            }
        }

        async fn delete(&self, id: ObjectId) -> Result<DeleteAck, ServiceError> {
            let mut rows = self.rows.write().await;
            let before = rows.len();
            rows.retain(|r| r.id != id);
            Ok(DeleteAck::new((before - rows.len()) as u64))
        }
    }
}
