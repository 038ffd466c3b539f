//! Registered site users as shown in the admin users table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// A user account of the public site.
pub struct UserRecord {
    /// Identifier, unique within the collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Mobile number including country code.
    pub mobile: String,
    /// Role on the site.
    pub role: UserRole,
    /// State of the user's listing subscription.
    pub subscription_status: UserSubscriptionStatus,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Agent,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserSubscriptionStatus {
    Active,
    Inactive,
    Expired,
}
