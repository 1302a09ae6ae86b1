use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::info;

use super::validation::{validate_movie_input, validate_pagination};
use super::{ApiError, ApiResponse, AppState, ListMoviesQuery, MoviePageDto};
use crate::models::{Movie, MovieInput};
use crate::services::PageQuery;

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<Json<ApiResponse<MoviePageDto>>, ApiError> {
    let (page, size) = validate_pagination(query.page, query.size)?;
    let search_text = query.search_text.filter(|s| !s.trim().is_empty());

    match &search_text {
        Some(text) => info!(
            "Fetching movies with search - Page: {}, Size: {}, SearchText: {}",
            page, size, text
        ),
        None => info!("Fetching movies - Page: {}, Size: {}", page, size),
    }

    let result = state
        .movie_service()
        .get_paged(PageQuery {
            page,
            size,
            search: search_text.clone(),
        })
        .await?;

    Ok(Json(ApiResponse::success(MoviePageDto::new(
        result.items,
        page,
        size,
        search_text,
        result.total,
    ))))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MovieInput>,
) -> Result<(StatusCode, Json<ApiResponse<Movie>>), ApiError> {
    validate_movie_input(&payload)?;
    info!("Creating a new movie with IMDb ID {}", payload.imdb_id);

    let movie = state.movie_service().create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(movie))))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<MovieInput>,
) -> Result<Json<ApiResponse<Movie>>, ApiError> {
    validate_movie_input(&payload)?;
    info!("Updating movie with Id {}", id);

    let movie = state.movie_service().update(&id, payload).await?;

    Ok(Json(ApiResponse::success(movie)))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting movie with Id {}", id);
    state.movie_service().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
