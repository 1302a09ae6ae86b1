use serde::{Deserialize, Serialize};

use crate::models::Movie;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    pub search_text: Option<String>,
}

const fn default_page() -> u64 {
    1
}

const fn default_size() -> u64 {
    20
}

#[derive(Debug, Serialize)]
pub struct MoviePageDto {
    pub items: Vec<Movie>,
    pub page: u64,
    pub size: u64,
    pub search_text: Option<String>,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl MoviePageDto {
    #[must_use]
    pub fn new(
        items: Vec<Movie>,
        page: u64,
        size: u64,
        search_text: Option<String>,
        total: u64,
    ) -> Self {
        let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };
        Self {
            items,
            page,
            size,
            search_text,
            total,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub database: String,
    pub cache_backend: String,
}
