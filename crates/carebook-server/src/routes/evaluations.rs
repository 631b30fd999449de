use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use carebook_core::models::Evaluation;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_evaluations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Evaluation>>, ApiError> {
    Ok(Json(state.store.list_evaluations().await?))
}

pub async fn delete_evaluation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.delete_evaluation(id).await?;
    Ok(Json(()))
}
