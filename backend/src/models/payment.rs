use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// A payment received from a user.
pub struct PaymentRecord {
    pub id: String,
    /// Paying user; not validated against the users collection.
    pub user_id: String,
    /// What the payment was for.
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub amount: f64,
    /// ISO 4217 code.
    pub currency: String,
    pub status: PaymentStatus,
    pub payment_method: String,
    /// Reference issued by the payment gateway.
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Subscription,
    PropertyListing,
    FeaturedListing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}
