use anyhow::{anyhow, Context};
use std::{env, net::SocketAddr};

use crate::utils::password::hash_password;

const DEFAULT_JWT_SECRET: &str = "homestead-dev-secret-change-this-in-production";
/// Thirty days.
pub const MAX_SESSION_EXPIRATION_HOURS: u64 = 720;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Argon2 PHC string the admin credential is verified against.
    pub admin_password_hash: String,
    pub jwt_secret: String,
    pub session_expiration_hours: u64,
    pub cors_allow_origins: Vec<String>,
    pub users_per_page: u32,
    pub session_rate_limit_max_requests: u32,
    pub session_rate_limit_window_seconds: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", lookup("PORT"), 3000u16)?;

        let admin_password_hash = match (
            non_empty(lookup("ADMIN_PASSWORD_HASH")),
            non_empty(lookup("ADMIN_PASSWORD")),
        ) {
            (Some(hash), _) => {
                argon2::PasswordHash::new(&hash)
                    .map_err(|e| anyhow!("ADMIN_PASSWORD_HASH is not a valid PHC string: {}", e))?;
                hash
            }
            (None, Some(plain)) => {
                tracing::warn!(
                    "ADMIN_PASSWORD is set in plain text; prefer ADMIN_PASSWORD_HASH \
                     (see the hash_admin_password binary)"
                );
                hash_password(&plain)?
            }
            (None, None) => {
                return Err(anyhow!(
                    "ADMIN_PASSWORD_HASH (or ADMIN_PASSWORD) must be set to enable the admin session gate"
                ))
            }
        };

        let jwt_secret = non_empty(lookup("JWT_SECRET")).unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using the development default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let session_expiration_hours = parse_or(
            "SESSION_EXPIRATION_HOURS",
            lookup("SESSION_EXPIRATION_HOURS"),
            8u64,
        )?;
        if !(1..=MAX_SESSION_EXPIRATION_HOURS).contains(&session_expiration_hours) {
            return Err(anyhow!(
                "SESSION_EXPIRATION_HOURS must be between 1 and {}, got {}",
                MAX_SESSION_EXPIRATION_HOURS,
                session_expiration_hours
            ));
        }

        let cors_allow_origins = lookup("CORS_ALLOW_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|| vec!["http://localhost:8080".to_string()]);

        let users_per_page = parse_or("USERS_PER_PAGE", lookup("USERS_PER_PAGE"), 10u32)?;
        let session_rate_limit_max_requests = parse_or(
            "SESSION_RATE_LIMIT_MAX_REQUESTS",
            lookup("SESSION_RATE_LIMIT_MAX_REQUESTS"),
            10u32,
        )?;
        let session_rate_limit_window_seconds = parse_or(
            "SESSION_RATE_LIMIT_WINDOW_SECONDS",
            lookup("SESSION_RATE_LIMIT_WINDOW_SECONDS"),
            300u64,
        )?;

        Ok(Config {
            host,
            port,
            admin_password_hash,
            jwt_secret,
            session_expiration_hours,
            cors_allow_origins,
            users_per_page,
            session_rate_limit_max_requests,
            session_rate_limit_window_seconds,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid HOST/PORT: {}:{}", self.host, self.port))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
{
    match non_empty(raw) {
        Some(value) => value
            .parse()
            .map_err(|_| anyhow!("Invalid {} value: {}", key, value)),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
