use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::warn;

use super::{ApiError, ApiResponse, AppState, SystemStatus};
use crate::config::CacheBackend;

pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let database = match state.store().ping().await {
        Ok(()) => "ok".to_string(),
        Err(e) => {
            warn!(error = %e, "Database ping failed");
            "unavailable".to_string()
        }
    };

    let cache_backend = match state.shared.cache_backend {
        CacheBackend::Memory => "memory",
        CacheBackend::Redis => "redis",
    };

    Ok(Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        database,
        cache_backend: cache_backend.to_string(),
    })))
}
