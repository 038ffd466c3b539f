//! Enquiries submitted through the public contact form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::rules;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload posted by the contact form.
pub struct ContactSubmission {
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "rules::validate_not_blank")
    )]
    pub first_name: String,
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "rules::validate_not_blank")
    )]
    pub last_name: String,
    /// Address the brokerage replies to.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "rules::validate_mobile_number"))]
    pub mobile_no: String,
    /// Channel the visitor prefers to be reached on.
    pub preferred_mode_of_contact: ContactMode,
    /// Free-form question about a listing or service.
    #[validate(
        length(max = 2000, message = "must be at most 2000 characters"),
        custom(function = "rules::validate_not_blank")
    )]
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactMode {
    Email,
    Phone,
    Whatsapp,
}

/// `{success, message}` acknowledgement returned to the form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactAcknowledgement {
    pub success: bool,
    pub message: String,
}
