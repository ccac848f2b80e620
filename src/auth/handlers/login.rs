//! Login Handler
//!
//! POST /api/v1/login
//!
//! Checks the email/password pair and answers with a bearer access token.
//! Unknown email and wrong password are indistinguishable in the
//! response.

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::sessions::issue_token;
use crate::auth::users::authenticate_user;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - database or token signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login attempt for email: {}", request.email);

    let user = authenticate_user(&state.db, &request.email, &request.password).await?;
    let token = issue_token(&user, &state.config)?;

    tracing::info!("Login successful for user: {}", user.id);

    Ok(Json(TokenResponse::bearer(token)))
}
