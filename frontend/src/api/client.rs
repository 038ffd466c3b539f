use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await.trim_end_matches('/'), path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        decode_envelope(status, &body)
    }

    pub async fn create_session(&self, password: &str) -> Result<SessionGrant, ApiError> {
        let url = self.url("/admin/session").await;
        let request = self.client.post(url).json(&SessionRequest {
            password: password.to_string(),
        });
        self.send::<SessionGrant>(request).await?.into_data()
    }

    pub async fn end_session(&self, token: &str) -> Result<(), ApiError> {
        let url = self.url("/admin/session").await;
        let request = self.client.delete(url).bearer_auth(token);
        self.send::<()>(request).await.map(|_| ())
    }

    /// Page size is left to the server's `USERS_PER_PAGE`.
    async fn users_request(&self, token: &str, page: u32) -> RequestBuilder {
        let url = self.url("/admin/users").await;
        self.client
            .get(url)
            .bearer_auth(token)
            .query(&[("page", page)])
    }

    pub async fn list_users(&self, token: &str, page: u32) -> Result<Page<UserRecord>, ApiError> {
        let request = self.users_request(token, page).await;
        self.send::<Vec<UserRecord>>(request).await?.into_page()
    }

    pub async fn list_properties(&self, token: &str) -> Result<Vec<PropertyRecord>, ApiError> {
        let url = self.url("/admin/properties").await;
        self.send(self.client.get(url).bearer_auth(token))
            .await?
            .into_data()
    }

    pub async fn list_subscriptions(
        &self,
        token: &str,
    ) -> Result<Vec<SubscriptionRecord>, ApiError> {
        let url = self.url("/admin/subscriptions").await;
        self.send(self.client.get(url).bearer_auth(token))
            .await?
            .into_data()
    }

    pub async fn list_payments(&self, token: &str) -> Result<Vec<PaymentRecord>, ApiError> {
        let url = self.url("/admin/payments").await;
        self.send(self.client.get(url).bearer_auth(token))
            .await?
            .into_data()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn users_request_leaves_page_size_to_the_server() {
        let client = ApiClient::new_with_base_url("http://localhost:8080/api/");
        let request = client
            .users_request("token-1", 3)
            .await
            .build()
            .expect("request");

        assert_eq!(request.url().path(), "/api/admin/users");
        assert_eq!(request.url().query(), Some("page=3"));
        assert_eq!(
            request.headers()["authorization"].to_str().expect("header"),
            "Bearer token-1"
        );
    }
}
