//! Admin session gate: the persisted marker, the in-memory flag and the
//! sign-in/sign-out transitions between them.

use chrono::{DateTime, Utc};
use leptos::*;
use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, SessionGrant},
    pages::admin::repository::AdminRepository,
    utils::storage::{BrowserStorage, KeyValueStore},
};

pub const AUTH_MARKER_KEY: &str = "adminAuth";
pub const TOKEN_KEY: &str = "adminToken";
pub const EXPIRES_AT_KEY: &str = "adminTokenExpiresAt";

const AUTH_MARKER_VALUE: &str = "true";
const EMPTY_CREDENTIAL: &str = "Enter the admin password";
const INVALID_PASSWORD: &str = "Invalid password";
const SESSION_NOT_SAVED: &str = "Session could not be saved";

/// Route of the session gate.
pub const GATE_PATH: &str = "/admin";

/// Persisted half of the session: marker, bearer token and its expiry.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn browser() -> Self {
        Self::with_storage(BrowserStorage)
    }

    pub fn with_storage(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// Writes the token first and the marker last so a partial write never
    /// reads back as signed in.
    pub fn persist(&self, grant: &SessionGrant) -> Result<(), String> {
        self.storage.set(TOKEN_KEY, &grant.token)?;
        self.storage
            .set(EXPIRES_AT_KEY, &grant.expires_at.to_rfc3339())?;
        self.storage.set(AUTH_MARKER_KEY, AUTH_MARKER_VALUE)
    }

    /// Returns the stored token while the marker is set and unexpired at
    /// `now`. Anything else is cleared.
    pub fn restore(&self, now: DateTime<Utc>) -> Option<String> {
        let marker = self.storage.get(AUTH_MARKER_KEY);
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let expires_at = self
            .storage
            .get(EXPIRES_AT_KEY)
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|at| at.with_timezone(&Utc));

        match (marker.as_deref(), token, expires_at) {
            (Some(AUTH_MARKER_VALUE), Some(token), Some(expires_at)) if expires_at > now => {
                Some(token)
            }
            (None, None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.restore(Utc::now())
    }

    pub fn clear(&self) {
        self.storage.remove(AUTH_MARKER_KEY);
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(EXPIRES_AT_KEY);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub pending: bool,
    pub error: Option<String>,
}

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

pub fn validate_credential(credential: &str) -> Result<(), String> {
    if credential.is_empty() {
        return Err(EMPTY_CREDENTIAL.to_string());
    }
    Ok(())
}

pub fn initial_state(store: &SessionStore, now: DateTime<Utc>) -> SessionState {
    SessionState {
        authenticated: store.restore(now).is_some(),
        ..SessionState::default()
    }
}

/// Applies the server's answer to a sign-in attempt.
pub fn complete_sign_in(
    result: Result<SessionGrant, ApiError>,
    store: &SessionStore,
    set_state: WriteSignal<SessionState>,
) -> Result<(), String> {
    match result {
        Ok(grant) => {
            if let Err(err) = store.persist(&grant) {
                log::warn!("Session could not be persisted: {}", err);
                store.clear();
                let message = SESSION_NOT_SAVED.to_string();
                set_state.set(SessionState {
                    authenticated: false,
                    pending: false,
                    error: Some(message.clone()),
                });
                return Err(message);
            }
            set_state.set(SessionState {
                authenticated: true,
                pending: false,
                error: None,
            });
            Ok(())
        }
        Err(err) => {
            store.clear();
            let message = if err.is_unauthorized() {
                INVALID_PASSWORD.to_string()
            } else {
                err.error
            };
            set_state.set(SessionState {
                authenticated: false,
                pending: false,
                error: Some(message.clone()),
            });
            Err(message)
        }
    }
}

/// Drops the client session without contacting the server.
pub fn expire_session(store: &SessionStore, set_state: WriteSignal<SessionState>) {
    store.clear();
    set_state.set(SessionState::default());
}

pub async fn sign_in(
    credential: String,
    repo: &AdminRepository,
    set_state: WriteSignal<SessionState>,
) -> Result<(), String> {
    if let Err(message) = validate_credential(&credential) {
        set_state.update(|state| {
            state.authenticated = false;
            state.error = Some(message.clone());
        });
        return Err(message);
    }

    set_state.update(|state| {
        state.pending = true;
        state.error = None;
    });
    let result = repo.open_session(&credential).await;
    complete_sign_in(result, repo.session_store(), set_state)
}

/// Clears local state first; server-side revocation is best effort. Ends
/// by sending the browser back to the gate.
pub async fn sign_out(
    repo: &AdminRepository,
    set_state: WriteSignal<SessionState>,
    navigate: impl FnOnce(&str),
) {
    let token = repo.session_store().token();
    expire_session(repo.session_store(), set_state);
    if let Some(token) = token {
        if let Err(err) = repo.close_session(&token).await {
            log::warn!("Session revocation failed: {}", err);
        }
    }
    navigate(GATE_PATH);
}

pub fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(path) {
            log::warn!("Navigation to {} failed: {:?}", path, err);
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let store = use_context::<SessionStore>().unwrap_or_else(SessionStore::browser);
    let ctx = create_signal(initial_state(&store, Utc::now()));
    provide_context(store);
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::browser)
}

pub fn use_admin_repository() -> AdminRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    AdminRepository::new_with_client(Rc::new(api), use_session_store())
}

pub fn use_sign_in_action() -> Action<String, Result<(), String>> {
    let (_state, set_state) = use_session();
    let repo = use_admin_repository();

    create_action(move |credential: &String| {
        let credential = credential.clone();
        let repo = repo.clone();
        async move { sign_in(credential, &repo, set_state).await }
    })
}

pub fn use_sign_out_action() -> Action<(), ()> {
    let (_state, set_state) = use_session();
    let repo = use_admin_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { sign_out(&repo, set_state, navigate_to).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{grant_expiring_at, memory_session_store, UNREACHABLE_API};
    use chrono::Duration;

    fn repository(store: SessionStore) -> AdminRepository {
        AdminRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(UNREACHABLE_API)), store)
    }

    #[tokio::test]
    async fn empty_credential_never_reaches_the_server() {
        let runtime = create_runtime();
        let (store, _storage) = memory_session_store();
        let (state, set_state) = create_signal(SessionState::default());

        let result = sign_in(String::new(), &repository(store), set_state).await;

        assert_eq!(result, Err("Enter the admin password".to_string()));
        let snapshot = state.get();
        assert!(!snapshot.pending);
        assert_eq!(snapshot.error.as_deref(), Some("Enter the admin password"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn transport_failure_keeps_the_gate_closed() {
        let runtime = create_runtime();
        let (store, storage) = memory_session_store();
        let (state, set_state) = create_signal(SessionState::default());

        let result = sign_in("open-house".into(), &repository(store), set_state).await;

        assert!(result.is_err());
        let snapshot = state.get();
        assert!(!snapshot.authenticated);
        assert!(!snapshot.pending);
        assert!(snapshot.error.is_some());
        assert!(storage.get(AUTH_MARKER_KEY).is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_out_clears_locally_even_when_revocation_fails() {
        let runtime = create_runtime();
        let (store, storage) = memory_session_store();
        store
            .persist(&grant_expiring_at(Utc::now() + Duration::hours(1)))
            .unwrap();
        let (state, set_state) = create_signal(SessionState {
            authenticated: true,
            ..SessionState::default()
        });

        let visited = std::cell::RefCell::new(Vec::new());
        sign_out(&repository(store), set_state, |path| {
            visited.borrow_mut().push(path.to_string())
        })
        .await;

        assert!(!state.get().authenticated);
        assert!(storage.get(AUTH_MARKER_KEY).is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert_eq!(visited.into_inner(), vec![GATE_PATH.to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_out_returns_to_the_gate_without_a_stored_token() {
        let runtime = create_runtime();
        let (store, _storage) = memory_session_store();
        let (_state, set_state) = create_signal(SessionState::default());

        let mut visited = None;
        sign_out(&repository(store), set_state, |path| visited = Some(path.to_string())).await;

        assert_eq!(visited.as_deref(), Some("/admin"));
        runtime.dispose();
    }
}
