use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        session::{SessionGrant, SessionRequest},
        ApiEnvelope,
    },
    state::AppState,
    utils::{
        jwt::{create_session_token, SessionClaims},
        password::verify_password,
    },
};

const INVALID_PASSWORD: &str = "Invalid password";

pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<SessionRequest>,
) -> Result<Json<ApiEnvelope<SessionGrant>>, AppError> {
    payload.validate()?;

    let matches = verify_password(&payload.password, &state.config.admin_password_hash)?;
    if !matches {
        tracing::warn!("Admin sign-in rejected");
        return Err(AppError::Unauthorized(INVALID_PASSWORD.to_string()));
    }

    let claims = SessionClaims::new(state.config.session_expiration_hours)?;
    let token = create_session_token(&claims, &state.config.jwt_secret)?;
    let expires_at = claims.expires_at();
    state.sessions.register(&claims.jti, expires_at);
    tracing::info!(jti = %claims.jti, %expires_at, "Admin session opened");

    Ok(Json(ApiEnvelope::ok(SessionGrant { token, expires_at })))
}

pub async fn end_session(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<ApiEnvelope<()>>, AppError> {
    if state.sessions.revoke(&claims.jti) {
        tracing::info!(jti = %claims.jti, "Admin session closed");
    }
    Ok(Json(ApiEnvelope::ok(())))
}
