use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string},
    options::FindOneOptions,
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::errors::{db_err, ModelError};

pub const COLLECTION: &str = "services";

/// Prices arrive as either `"20.00"` or `20` depending on who seeded the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    #[serde(default)]
    pub details: String,
}

/// A service the garage offers. Read-only from this backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub title: String,
    pub img: String,
    pub price: Price,
    pub service_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facility: Vec<Facility>,
}

/// Reduced projection served by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub title: String,
    pub img: String,
    pub price: Price,
    pub service_id: String,
}

impl From<&ServiceRecord> for ServiceSummary {
    fn from(r: &ServiceRecord) -> Self {
        Self {
            id: r.id,
            title: r.title.clone(),
            img: r.img.clone(),
            price: r.price.clone(),
            service_id: r.service_id.clone(),
        }
    }
}

pub async fn list_all(coll: &Collection<ServiceRecord>) -> Result<Vec<ServiceRecord>, ModelError> {
    let cursor = coll.find(doc! {}, None).await.map_err(db_err)?;
    cursor.try_collect().await.map_err(db_err)
}

pub async fn find_summary(
    coll: &Collection<ServiceRecord>,
    id: ObjectId,
) -> Result<Option<ServiceSummary>, ModelError> {
    let options = FindOneOptions::builder()
        .projection(doc! { "title": 1, "img": 1, "price": 1, "service_id": 1 })
        .build();
    coll.clone_with_type::<ServiceSummary>()
        .find_one(doc! { "_id": id }, options)
        .await
        .map_err(db_err)
}
