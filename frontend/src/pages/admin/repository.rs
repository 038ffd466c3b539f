use crate::{
    api::{
        ApiClient, ApiError, Page, PaymentRecord, PropertyRecord, SessionGrant,
        SubscriptionRecord, UserRecord,
    },
    state::session::SessionStore,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
    store: SessionStore,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>, store: SessionStore) -> Self {
        Self { client, store }
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }

    fn token(&self) -> Result<String, ApiError> {
        self.store
            .token()
            .ok_or_else(|| ApiError::unauthorized("Sign in to continue"))
    }

    pub async fn open_session(&self, password: &str) -> Result<SessionGrant, ApiError> {
        self.client.create_session(password).await
    }

    pub async fn close_session(&self, token: &str) -> Result<(), ApiError> {
        self.client.end_session(token).await
    }

    pub async fn fetch_users(&self, page: u32) -> Result<Page<UserRecord>, ApiError> {
        let token = self.token()?;
        self.client.list_users(&token, page).await
    }

    pub async fn fetch_properties(&self) -> Result<Vec<PropertyRecord>, ApiError> {
        let token = self.token()?;
        self.client.list_properties(&token).await
    }

    pub async fn fetch_subscriptions(&self) -> Result<Vec<SubscriptionRecord>, ApiError> {
        let token = self.token()?;
        self.client.list_subscriptions(&token).await
    }

    pub async fn fetch_payments(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        let token = self.token()?;
        self.client.list_payments(&token).await
    }
}
