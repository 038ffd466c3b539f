#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, SessionGrant};
    use crate::state::session::{SessionState, SessionStore};
    use crate::utils::storage::MemoryStorage;
    use chrono::{DateTime, Utc};
    use leptos::*;

    /// Nothing listens on the discard port, so requests fail fast.
    pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

    pub fn memory_session_store() -> (SessionStore, MemoryStorage) {
        let storage = MemoryStorage::default();
        (SessionStore::with_storage(storage.clone()), storage)
    }

    pub fn grant_expiring_at(expires_at: DateTime<Utc>) -> SessionGrant {
        SessionGrant {
            token: "token-1".into(),
            expires_at,
        }
    }

    /// Provides session state, an in-memory store and an offline client.
    pub fn provide_session(
        state: SessionState,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (store, _storage) = memory_session_store();
        provide_context(store);
        provide_context(ApiClient::new_with_base_url(UNREACHABLE_API));
        let ctx = create_signal(state);
        provide_context(ctx);
        ctx
    }
}
