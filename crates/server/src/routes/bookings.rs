use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use axum_extra::extract::WithRejection;
use models::{
    ack::{DeleteAck, InsertAck, UpdateAck},
    booking::{BookingRecord, NewBooking, StatusUpdate},
};
use serde::Deserialize;
use service::auth::domain::Identity;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

#[utoipa::path(
    get, path = "/bookings", tag = "bookings",
    params(("email" = String, Query, description = "Owner email; must match the token")),
    responses(
        (status = 200, description = "Caller's bookings", body = [crate::openapi::BookingDoc]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Email does not match the token")
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(q): Query<OwnerQuery>,
) -> Result<Json<Vec<BookingRecord>>, ApiError> {
    let list = state.bookings.list_for(&identity, q.email.as_deref()).await?;
    info!(count = list.len(), "list bookings");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/bookings", tag = "bookings",
    request_body = crate::openapi::NewBookingDoc,
    responses((status = 200, description = "Inserted", body = crate::openapi::InsertAckDoc), (status = 400, description = "Validation Error"))
)]
pub async fn create_booking(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<NewBooking>, ApiError>,
) -> Result<Json<InsertAck>, ApiError> {
    Ok(Json(state.bookings.create(input).await?))
}

#[utoipa::path(
    patch, path = "/bookings/{id}", tag = "bookings",
    params(("id" = String, Path, description = "24-char hex ObjectId")),
    request_body = crate::openapi::StatusUpdateDoc,
    responses((status = 200, description = "Update result", body = crate::openapi::UpdateAckDoc), (status = 400, description = "Malformed id or blank status"))
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(update), _): WithRejection<Json<StatusUpdate>, ApiError>,
) -> Result<Json<UpdateAck>, ApiError> {
    Ok(Json(state.bookings.update_status(&id, update).await?))
}

#[utoipa::path(
    delete, path = "/bookings/{id}", tag = "bookings",
    params(("id" = String, Path, description = "24-char hex ObjectId")),
    responses((status = 200, description = "Delete result", body = crate::openapi::DeleteAckDoc), (status = 400, description = "Malformed id"))
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    Ok(Json(state.bookings.delete(&id).await?))
}
