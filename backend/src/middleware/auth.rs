use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{
    config::Config,
    error::AppError,
    services::SessionRegistry,
    state::AppState,
    utils::jwt::{verify_session_token, SessionClaims},
};

/// Admits requests carrying a valid, unrevoked admin session token and
/// exposes its [`SessionClaims`] to handlers.
pub async fn require_admin_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate_request(request.headers(), &state.config, &state.sessions)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}

pub fn authenticate_request(
    headers: &HeaderMap,
    config: &Config,
    sessions: &SessionRegistry,
) -> Result<SessionClaims, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Sign in to continue".to_string()))?;

    let claims = verify_session_token(token, &config.jwt_secret).map_err(|err| {
        tracing::debug!(error = %err, "Rejected admin session token");
        AppError::Unauthorized("Session is invalid or has expired".to_string())
    })?;

    if !sessions.is_active(&claims.jti) {
        return Err(AppError::Unauthorized(
            "Session is invalid or has expired".to_string(),
        ));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bearer_scheme_case_insensitively() {
        assert_eq!(parse_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("BEARER   abc "), Some("abc"));
    }

    #[test]
    fn rejects_other_schemes_and_empty_tokens() {
        assert_eq!(parse_bearer_token("Basic abc"), None);
        assert_eq!(parse_bearer_token("Bearer "), None);
        assert_eq!(parse_bearer_token("abc"), None);
    }
}
