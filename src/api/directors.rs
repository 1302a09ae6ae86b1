use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use super::validation::validate_director_input;
use super::{ApiError, ApiResponse, AppState};
use crate::models::{Director, DirectorInput};

pub async fn create_director(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DirectorInput>,
) -> Result<(StatusCode, Json<ApiResponse<Director>>), ApiError> {
    validate_director_input(&payload)?;
    info!(
        "Creating new director {} {}",
        payload.first_name, payload.second_name
    );

    let director = state.director_service().create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(director))))
}

pub async fn delete_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting director {}", id);
    state.director_service().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
