use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: i64,    // expiration time
    pub iat: i64,    // issued at
    pub jti: String, // session id, checked against the registry
}

impl SessionClaims {
    pub fn new(expiration_hours: u64) -> anyhow::Result<Self> {
        Self::issued_at(Utc::now(), expiration_hours)
    }

    /// Fails instead of overflowing when the expiry is out of range.
    pub fn issued_at(now: DateTime<Utc>, expiration_hours: u64) -> anyhow::Result<Self> {
        let exp = i64::try_from(expiration_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                anyhow::anyhow!("Session expiry of {} hours is out of range", expiration_hours)
            })?;
        Ok(Self {
            sub: ADMIN_SUBJECT.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

pub fn create_session_token(claims: &SessionClaims, secret: &str) -> anyhow::Result<String> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;
    Ok(token)
}

pub fn verify_session_token(token: &str, secret: &str) -> anyhow::Result<SessionClaims> {
    let mut validation = Validation::default();
    validation.set_required_spec_claims(&["exp", "sub"]);
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;
    if token_data.claims.sub != ADMIN_SUBJECT {
        anyhow::bail!("Unexpected token subject");
    }
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_round_trip_keeps_jti() {
        let claims = SessionClaims::new(1).expect("claims");
        let token = create_session_token(&claims, "secret").expect("create token");
        let verified = verify_session_token(&token, "secret").expect("verify token");
        assert_eq!(verified, claims);
        assert_eq!(verified.sub, ADMIN_SUBJECT);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_session_token(&SessionClaims::new(1).expect("claims"), "secret").expect("create");
        assert!(verify_session_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = SessionClaims::issued_at(Utc::now() - Duration::hours(3), 1).expect("claims");
        let token = create_session_token(&claims, "secret").expect("create");
        assert!(verify_session_token(&token, "secret").is_err());
    }

    #[test]
    fn oversized_expiry_is_an_error_not_a_panic() {
        assert!(SessionClaims::new(10_000_000_000).is_err());
        assert!(SessionClaims::new(u64::MAX).is_err());
    }

    #[test]
    fn expires_at_matches_exp_claim() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).single().expect("time");
        let claims = SessionClaims::issued_at(now, 8).expect("claims");
        assert_eq!(
            claims.expires_at(),
            Utc.with_ymd_and_hms(2026, 3, 1, 17, 0, 0).single().expect("time")
        );
    }
}
