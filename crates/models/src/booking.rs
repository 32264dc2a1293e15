use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string, Document},
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::ack::{DeleteAck, InsertAck, UpdateAck};
use crate::catalog::Price;
use crate::errors::{db_err, ModelError};

pub const COLLECTION: &str = "booking";
pub const DEFAULT_STATUS: &str = "pending";

/// A stored booking. `email` is the owner and never changes after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub email: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub details: BookingDetails,
}

/// Caller-supplied booking fields besides owner and status. Keys outside the
/// known set are kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    #[serde(rename = "customerName", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Insertion payload, as posted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub details: BookingDetails,
}

impl NewBooking {
    /// Check the owner email and fill the default status.
    pub fn validated(mut self) -> Result<Self, ModelError> {
        self.email = self.email.trim().to_string();
        validate_email(&self.email)?;
        // The store assigns the key
        self.details.extra.remove("_id");
        match self.status.as_deref().map(str::trim) {
            None => self.status = Some(DEFAULT_STATUS.to_string()),
            Some("") => return Err(ModelError::Validation("status must not be blank".into())),
            Some(s) => self.status = Some(s.to_string()),
        }
        Ok(self)
    }

    pub fn into_record(self, id: ObjectId) -> BookingRecord {
        BookingRecord { id, email: self.email, status: self.status, details: self.details }
    }
}

/// PATCH body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: String,
}

impl StatusUpdate {
    pub fn validated(self) -> Result<String, ModelError> {
        let status = self.status.trim();
        if status.is_empty() {
            return Err(ModelError::Validation("status is required".into()));
        }
        Ok(status.to_string())
    }
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ModelError::Validation("invalid email".into())),
    }
}

pub async fn list_by_owner(
    coll: &Collection<BookingRecord>,
    email: Option<&str>,
) -> Result<Vec<BookingRecord>, ModelError> {
    let filter = match email.filter(|e| !e.is_empty()) {
        Some(e) => doc! { "email": e },
        None => doc! {},
    };
    let cursor = coll.find(filter, None).await.map_err(db_err)?;
    cursor.try_collect().await.map_err(db_err)
}

pub async fn insert(coll: &Collection<BookingRecord>, booking: &NewBooking) -> Result<InsertAck, ModelError> {
    let res = coll
        .clone_with_type::<NewBooking>()
        .insert_one(booking, None)
        .await
        .map_err(db_err)?;
    let id = res
        .inserted_id
        .as_object_id()
        .ok_or_else(|| ModelError::Db("store returned a non-ObjectId key".into()))?;
    Ok(InsertAck::new(id))
}

pub async fn update_status(
    coll: &Collection<BookingRecord>,
    id: ObjectId,
    status: &str,
) -> Result<UpdateAck, ModelError> {
    let res = coll
        .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } }, None)
        .await
        .map_err(db_err)?;
    Ok(UpdateAck::new(res.matched_count, res.modified_count))
}

pub async fn delete(coll: &Collection<BookingRecord>, id: ObjectId) -> Result<DeleteAck, ModelError> {
    let res = coll.delete_one(doc! { "_id": id }, None).await.map_err(db_err)?;
    Ok(DeleteAck::new(res.deleted_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use serde_json::json;

    fn posted(body: serde_json::Value) -> NewBooking {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn new_booking_defaults_status_to_pending() {
        let b = posted(json!({
            "customerName": "Ada",
            "email": " ada@x.com ",
            "date": "2026-10-20",
            "service": "Engine Repair",
            "service_id": "03",
            "price": "150.00"
        }))
        .validated()
        .unwrap();
        assert_eq!(b.email, "ada@x.com");
        assert_eq!(b.status.as_deref(), Some(DEFAULT_STATUS));
        assert_eq!(b.details.customer_name.as_deref(), Some("Ada"));
        assert_eq!(b.details.price, Some(Price::Text("150.00".into())));
    }

    #[test]
    fn new_booking_rejects_bad_email_and_blank_status() {
        assert!(matches!(
            posted(json!({"email": "nobody"})).validated(),
            Err(ModelError::Validation(_))
        ));
        assert!(matches!(
            posted(json!({"email": "a@x.com", "status": "  "})).validated(),
            Err(ModelError::Validation(_))
        ));
    }

    #[test]
    fn missing_email_fails_to_parse() {
        assert!(serde_json::from_value::<NewBooking>(json!({"service": "x"})).is_err());
    }

    #[test]
    fn stored_document_has_no_id_and_camel_case_name() {
        let b = posted(json!({"email": "a@x.com", "customerName": "A"})).validated().unwrap();
        let doc = bson::to_document(&b).unwrap();
        assert!(doc.get("_id").is_none());
        assert_eq!(doc.get_str("customerName").unwrap(), "A");
        assert_eq!(doc.get_str("status").unwrap(), "pending");
    }

    #[test]
    fn record_serializes_hex_id() {
        let id = ObjectId::new();
        let record = posted(json!({"email": "a@x.com"})).validated().unwrap().into_record(id);
        let body = serde_json::to_value(&record).unwrap();
        assert_eq!(body["_id"], json!(id.to_hex()));
        assert_eq!(body["email"], json!("a@x.com"));
        assert_eq!(body["status"], json!("pending"));
    }

    #[test]
    fn status_update_requires_value() {
        let ok = StatusUpdate { status: " confirm ".into() }.validated().unwrap();
        assert_eq!(ok, "confirm");
        assert!(StatusUpdate { status: String::new() }.validated().is_err());
    }

    #[test]
    fn extra_fields_are_kept_and_client_id_dropped() {
        let b = posted(json!({
            "email": "a@x.com",
            "phone": "0123",
            "message": "please hurry",
            "_id": "client-chosen"
        }))
        .validated()
        .unwrap();
        let doc = bson::to_document(&b).unwrap();
        assert!(doc.get("_id").is_none());
        assert_eq!(doc.get_str("phone").unwrap(), "0123");

        let id = ObjectId::new();
        let body = serde_json::to_value(b.into_record(id)).unwrap();
        assert_eq!(body["_id"], json!(id.to_hex()));
        assert_eq!(body["phone"], json!("0123"));
        assert_eq!(body["message"], json!("please hurry"));
    }

    #[test]
    fn stored_document_without_owner_is_rejected() {
        let stored = doc! { "_id": ObjectId::new(), "status": "pending", "service": "Oil Change" };
        assert!(bson::from_document::<BookingRecord>(stored).is_err());

        let owned = doc! { "_id": ObjectId::new(), "email": "a@x.com", "note": "x" };
        let record: BookingRecord = bson::from_document(owned).unwrap();
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.details.extra.get_str("note").unwrap(), "x");
    }
}
