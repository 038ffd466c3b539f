//! In-process registry of issued admin sessions.
//!
//! A signed token is only honoured while its `jti` is registered here, so
//! sign-out takes effect before the token's own expiry.

use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    active: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, jti: &str, expires_at: DateTime<Utc>) {
        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        let now = Utc::now();
        active.retain(|_, exp| *exp > now);
        active.insert(jti.to_string(), expires_at);
    }

    pub fn is_active(&self, jti: &str) -> bool {
        self.is_active_at(jti, Utc::now())
    }

    pub fn is_active_at(&self, jti: &str, now: DateTime<Utc>) -> bool {
        let active = self.active.read().unwrap_or_else(|e| e.into_inner());
        active.get(jti).is_some_and(|exp| *exp > now)
    }

    /// Returns whether the session was registered.
    pub fn revoke(&self, jti: &str) -> bool {
        let mut active = self.active.write().unwrap_or_else(|e| e.into_inner());
        active.remove(jti).is_some()
    }

    pub fn len(&self) -> usize {
        self.active.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn registered_session_is_active_until_revoked() {
        let registry = SessionRegistry::new();
        registry.register("jti-1", Utc::now() + Duration::hours(1));
        assert!(registry.is_active("jti-1"));
        assert!(!registry.is_active("jti-2"));

        assert!(registry.revoke("jti-1"));
        assert!(!registry.is_active("jti-1"));
        assert!(!registry.revoke("jti-1"));
    }

    #[test]
    fn session_is_inactive_after_expiry() {
        let registry = SessionRegistry::new();
        let expires = Utc::now() + Duration::minutes(5);
        registry.register("jti-1", expires);
        assert!(registry.is_active_at("jti-1", expires - Duration::seconds(1)));
        assert!(!registry.is_active_at("jti-1", expires));
    }

    #[test]
    fn registering_prunes_expired_sessions() {
        let registry = SessionRegistry::new();
        registry.register("stale", Utc::now() - Duration::minutes(1));
        registry.register("fresh", Utc::now() + Duration::hours(1));
        assert_eq!(registry.len(), 1);
        assert!(registry.is_active("fresh"));
    }

    #[test]
    fn clones_share_state() {
        let registry = SessionRegistry::new();
        let clone = registry.clone();
        registry.register("jti-1", Utc::now() + Duration::hours(1));
        assert!(clone.is_active("jti-1"));
        assert!(!clone.is_empty());
    }
}
