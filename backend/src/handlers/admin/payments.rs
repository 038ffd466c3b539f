use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::{payment::PaymentRecord, ApiEnvelope},
    state::AppState,
};

pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<PaymentRecord>>>, AppError> {
    let payments = state.data.list_payments().await?;
    Ok(Json(ApiEnvelope::ok(payments)))
}
