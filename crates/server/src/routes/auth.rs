use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Json,
};
use axum_extra::extract::{
    cookie::{Cookie, CookieJar},
    WithRejection,
};
use common::types::Success;
use models::booking::validate_email;
use service::auth::{domain::Identity, token::TOKEN_COOKIE};
use service::errors::ServiceError;
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::state::AppState;

fn token_cookie(state: &AppState, value: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(state.cookie_secure)
        .build()
}

#[utoipa::path(post, path = "/jwt", tag = "auth", request_body = crate::openapi::IdentityDoc, responses((status = 200, description = "Token cookie set", body = crate::openapi::SuccessDoc), (status = 400, description = "Bad Request")))]
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(identity), _): WithRejection<Json<Identity>, ApiError>,
) -> Result<(CookieJar, Json<Success>), ApiError> {
    validate_email(&identity.email).map_err(ServiceError::from)?;
    let token = state.tokens.issue(&identity)?;
    info!(email = %identity.email, "token_cookie_set");
    Ok((jar.add(token_cookie(&state, token)), Json(Success::ok())))
}

/// Overwrite the cookie with an expired, empty one. Tokens already handed out
/// stay valid until `exp`; there is no server-side revocation list.
#[utoipa::path(post, path = "/logout", tag = "auth", responses((status = 200, description = "Token cookie cleared", body = crate::openapi::SuccessDoc)))]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Success>) {
    let mut removal = token_cookie(&state, String::new());
    removal.make_removal();
    (jar.add(removal), Json(Success::ok()))
}

/// Access guard: requires a valid `token` cookie and stores the decoded
/// `Identity` in request extensions for the handler.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let jar = CookieJar::from_headers(req.headers());
    match state.tokens.verify_cookie(jar.get(TOKEN_COOKIE).map(|c| c.value())) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %req.uri().path(), reason = %e, "token validation failed");
            Err(e.into())
        }
    }
}
