use axum::{
    extract::{Path, State},
    Json,
};
use models::catalog::{ServiceRecord, ServiceSummary};

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/services", tag = "services", responses((status = 200, description = "Every service in store order", body = [crate::openapi::ServiceDoc])))]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<ServiceRecord>>, ApiError> {
    Ok(Json(state.catalog.list_all().await?))
}

/// Unknown ids answer `null` with 200, not 404.
#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = String, Path, description = "24-char hex ObjectId")),
    responses(
        (status = 200, description = "Reduced projection, or null", body = crate::openapi::ServiceSummaryDoc),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ServiceSummary>>, ApiError> {
    Ok(Json(state.catalog.get_by_id(&id).await?))
}
