//! Per-client throttling of the admin sign-in endpoint.

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use governor::middleware::StateInformationMiddleware;
use std::{sync::Arc, time::Duration};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorError,
    GovernorLayer,
};

use crate::{config::Config, error::AppError};

pub type SessionRateLimiter = GovernorLayer<PeerIpKeyExtractor, StateInformationMiddleware, Body>;

/// Allows `session_rate_limit_max_requests` attempts per peer IP, refilled
/// one at a time every `session_rate_limit_window_seconds`.
pub fn create_session_rate_limiter(config: &Config) -> anyhow::Result<SessionRateLimiter> {
    let burst_size = config.session_rate_limit_max_requests.max(1);
    let window_seconds = config.session_rate_limit_window_seconds.max(1);
    let governor_conf = GovernorConfigBuilder::default()
        .period(Duration::from_secs(window_seconds))
        .burst_size(burst_size)
        .key_extractor(PeerIpKeyExtractor)
        .use_headers()
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid session rate limit configuration"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)).error_handler(rate_limit_error_handler))
}

fn rate_limit_error_handler(error: GovernorError) -> Response<Body> {
    match error {
        GovernorError::TooManyRequests { wait_time, headers } => {
            tracing::warn!(retry_after = wait_time, "Session attempts rate limited");
            let mut response = AppError::TooManyRequests {
                retry_after: wait_time.max(1),
            }
            .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => AppError::Internal(anyhow::anyhow!(
            "Unable to determine client address for rate limiting"
        ))
        .into_response(),
        GovernorError::Other { code, msg, headers } => {
            let mut response =
                AppError::BadRequest(msg.unwrap_or_else(|| "Rate limit error".to_string()))
                    .into_response();
            *response.status_mut() = code;
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
    }
}
