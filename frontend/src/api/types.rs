use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// `{success, data, pagination?}` as returned by every admin endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u32,
    pub pages: u32,
    pub current_page: u32,
    pub per_page: u32,
}

/// One page of a collection plus its metadata, when the endpoint paginates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub pagination: Option<Pagination>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: String,
    pub subscription_status: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub price: u64,
    pub location: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub area: u32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub id: String,
    pub user_id: String,
    pub plan: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount: f64,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub payment_method: String,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "MALFORMED_RESPONSE".to_string(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

// Error bodies carry `success: false` alongside the fields above.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
    code: String,
    #[serde(default)]
    details: Option<Value>,
}

/// Interprets a response body for `status`.
///
/// Non-2xx bodies become the server's [`ApiError`]; a 2xx body that does not
/// parse, or parses with `success: false`, is reported rather than defaulted.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiEnvelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(decode_error(status, body));
    }
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)
        .map_err(|e| ApiError::malformed(format!("Unexpected response from server: {}", e)))?;
    if !envelope.success {
        return Err(decode_error(status, body));
    }
    Ok(envelope)
}

fn decode_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(err) => ApiError {
            error: err.error,
            code: err.code,
            details: err.details,
        },
        Err(_) if status == 401 => ApiError::unauthorized("Sign in to continue"),
        Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
    }
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::malformed("Response did not include data"))
    }

    pub fn into_page(self) -> Result<Page<T::Item>, ApiError>
    where
        T: IntoIterator,
    {
        let pagination = self.pagination;
        let rows = self.into_data()?.into_iter().collect();
        Ok(Page { rows, pagination })
    }
}
