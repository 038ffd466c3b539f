//! Admin session gate payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Credential submitted by the admin sign-in form.
pub struct SessionRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for SessionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Signed session issued after a successful credential check.
pub struct SessionGrant {
    /// Bearer token for the admin data endpoints.
    pub token: String,
    /// Instant after which the token is rejected.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let request = SessionRequest {
            password: "open-house".into(),
        };
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("open-house"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn grant_serializes_camel_case() {
        let grant = SessionGrant {
            token: "t".into(),
            expires_at: DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                .expect("timestamp")
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&grant).expect("serialize");
        assert_eq!(json["expiresAt"], "2026-01-01T00:00:00Z");
    }
}
