//! Authentication Middleware
//!
//! Guards the protected routes. For each request it:
//!
//! 1. Pulls the token out of `Authorization: Bearer <token>`
//! 2. Validates signature and expiry
//! 3. Loads the account behind the token's subject
//! 4. Attaches it to request extensions as `CurrentUser`
//!
//! A token whose subject no longer exists is treated exactly like an
//! invalid token. Handlers behind the middleware take `CurrentUser` as an
//! extractor and can assume it is present.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::validate_token;
use crate::auth::users::{get_user_by_id, User};
use crate::error::ApiError;
use crate::server::state::AppState;

/// The authenticated account, resolved from the bearer token
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Authentication middleware for protected routes
///
/// Returns 401 via `ApiError` if the token is missing, malformed, expired,
/// badly signed, or refers to a deleted account.
pub async fn require_auth(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let claims = validate_token(token, &app_state.config)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Unparseable subject in token: {:?}", e);
        ApiError::InvalidToken
    })?;

    let Some(user) = get_user_by_id(&app_state.db, user_id).await? else {
        tracing::warn!("Token subject {} no longer exists", user_id);
        return Err(ApiError::InvalidToken);
    };

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Extract the raw token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::InvalidToken
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a Bearer token");
        ApiError::InvalidToken
    })
}

/// Axum extractor for the authenticated account
///
/// Only works behind `require_auth`; elsewhere the extension is absent and
/// extraction rejects with 401.
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser not found in request extensions");
            ApiError::InvalidToken
        })
    }
}
