use axum::{Extension, Json};
use validator::Validate;

use crate::{
    error::AppError,
    middleware::RequestId,
    models::contact::{ContactAcknowledgement, ContactSubmission},
    utils::pii::{mask_email, mask_phone},
};

const ACKNOWLEDGEMENT: &str =
    "Thanks for reaching out. Our team will get back to you within one business day.";

pub async fn submit_contact(
    Extension(request_id): Extension<RequestId>,
    Json(payload): Json<ContactSubmission>,
) -> Result<Json<ContactAcknowledgement>, AppError> {
    payload.validate()?;

    tracing::info!(
        %request_id,
        email = %mask_email(&payload.email),
        mobile = %mask_phone(&payload.mobile_no),
        mode = ?payload.preferred_mode_of_contact,
        query_len = payload.query.chars().count(),
        "Contact enquiry received"
    );

    Ok(Json(ContactAcknowledgement {
        success: true,
        message: ACKNOWLEDGEMENT.to_string(),
    }))
}
