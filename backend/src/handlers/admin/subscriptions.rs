use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::{subscription::SubscriptionRecord, ApiEnvelope},
    state::AppState,
};

pub async fn list_subscriptions(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<SubscriptionRecord>>>, AppError> {
    let subscriptions = state.data.list_subscriptions().await?;
    Ok(Json(ApiEnvelope::ok(subscriptions)))
}
