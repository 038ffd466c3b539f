use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::{property::PropertyRecord, ApiEnvelope},
    state::AppState,
};

pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<PropertyRecord>>>, AppError> {
    let properties = state.data.list_properties().await?;
    Ok(Json(ApiEnvelope::ok(properties)))
}
