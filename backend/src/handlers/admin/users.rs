use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppError,
    models::{paginate, user::UserRecord, ApiEnvelope, PageQuery},
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiEnvelope<Vec<UserRecord>>>, AppError> {
    let (page, per_page) = query.resolve(state.config.users_per_page);
    let users = state.data.list_users().await?;
    let (rows, pagination) = paginate(&users, page, per_page);
    Ok(Json(ApiEnvelope::paginated(rows, pagination)))
}
