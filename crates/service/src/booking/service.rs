use std::sync::Arc;

use models::{
    ack::{DeleteAck, InsertAck, UpdateAck},
    booking::{BookingRecord, NewBooking, StatusUpdate},
    ids::parse_object_id,
};
use tracing::{info, instrument, warn};

use super::repository::BookingRepository;
use crate::auth::domain::Identity;
use crate::errors::ServiceError;

/// Booking business service independent of web framework
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// List the caller's own bookings. The requested email must equal the
    /// authenticated one; anything else, including no email, is forbidden.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::domain::Identity;
    /// use service::booking::{repository::mock::MockBookingRepository, BookingService};
    /// let svc = BookingService::new(Arc::new(MockBookingRepository::default()));
    /// let me = Identity { email: "a@x.com".into() };
    /// let mine = tokio_test::block_on(svc.list_for(&me, Some("a@x.com"))).unwrap();
    /// assert!(mine.is_empty());
    /// assert!(tokio_test::block_on(svc.list_for(&me, Some("b@x.com"))).is_err());
    /// ```
    #[instrument(skip(self, identity), fields(caller = %identity.email))]
    pub async fn list_for(
        &self,
        identity: &Identity,
        requested: Option<&str>,
    ) -> Result<Vec<BookingRecord>, ServiceError> {
        match requested {
            Some(email) if !email.is_empty() && email == identity.email => {
                self.repo.list_by_owner(Some(email)).await
            }
            _ => {
                warn!(requested = requested.unwrap_or_default(), "booking_list_forbidden");
                Err(ServiceError::Forbidden)
            }
        }
    }

    #[instrument(skip(self, booking), fields(email = %booking.email))]
    pub async fn create(&self, booking: NewBooking) -> Result<InsertAck, ServiceError> {
        let booking = booking.validated()?;
        let ack = self.repo.create(booking).await?;
        info!(id = %ack.inserted_id, "booking_created");
        Ok(ack)
    }

    #[instrument(skip(self, update))]
    pub async fn update_status(&self, id: &str, update: StatusUpdate) -> Result<UpdateAck, ServiceError> {
        let oid = parse_object_id(id)?;
        let status = update.validated()?;
        let ack = self.repo.update_status(oid, &status).await?;
        info!(matched = ack.matched_count, modified = ack.modified_count, %status, "booking_status_updated");
        Ok(ack)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<DeleteAck, ServiceError> {
        let oid = parse_object_id(id)?;
        let ack = self.repo.delete(oid).await?;
        info!(deleted = ack.deleted_count, "booking_deleted");
        Ok(ack)
    }
}
