use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use super::ApiError;
use crate::db::repositories::movie::page_offset;
use crate::models::{DirectorInput, MovieInput};

const MAX_PAGE_SIZE: u64 = 100;

fn imdb_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^tt\d{7,8}$").expect("Invalid regex"))
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max_len {
        return Err(ApiError::validation(format!(
            "{field} must be {max_len} characters or less"
        )));
    }
    Ok(())
}

fn limit_optional(field: &str, value: Option<&str>, max_len: usize) -> Result<(), ApiError> {
    if value.is_some_and(|v| v.chars().count() > max_len) {
        return Err(ApiError::validation(format!(
            "{field} cannot exceed {max_len} characters"
        )));
    }
    Ok(())
}

pub fn validate_imdb_id(imdb_id: &str) -> Result<&str, ApiError> {
    if !imdb_id_regex().is_match(imdb_id) {
        return Err(ApiError::validation(
            "IMDb ID must be in format tt1234567",
        ));
    }
    Ok(imdb_id)
}

pub fn validate_entity_id<'a>(kind: &str, id: &'a str) -> Result<&'a str, ApiError> {
    if uuid::Uuid::parse_str(id).is_err() {
        return Err(ApiError::validation(format!("Invalid {kind} ID format")));
    }
    Ok(id)
}

pub fn validate_movie_input(input: &MovieInput) -> Result<(), ApiError> {
    check_movie_input(input, today())
}

fn check_movie_input(input: &MovieInput, today: NaiveDate) -> Result<(), ApiError> {
    require_text("Title", &input.title, 200)?;
    require_text("Genre", &input.genre, 100)?;
    limit_optional("Description", input.description.as_deref(), 2000)?;
    validate_imdb_id(&input.imdb_id)?;
    validate_entity_id("director", &input.director_id)?;

    if !(0.0..=10.0).contains(&input.rating) {
        return Err(ApiError::validation("Rating must be between 0 and 10"));
    }

    if input.release_date > today {
        return Err(ApiError::validation("Release date cannot be in the future"));
    }

    Ok(())
}

pub fn validate_director_input(input: &DirectorInput) -> Result<(), ApiError> {
    check_director_input(input, today())
}

fn check_director_input(input: &DirectorInput, today: NaiveDate) -> Result<(), ApiError> {
    require_text("First name", &input.first_name, 100)?;
    require_text("Second name", &input.second_name, 100)?;
    limit_optional("Bio", input.bio.as_deref(), 1000)?;

    if input.birth_date >= today {
        return Err(ApiError::validation("Birth date must be in the past"));
    }

    Ok(())
}

pub fn validate_pagination(page: u64, size: u64) -> Result<(u64, u64), ApiError> {
    if page < 1 {
        return Err(ApiError::validation(
            "Page must be greater than or equal to 1",
        ));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(ApiError::validation(format!(
            "Size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    if page_offset(page, size).is_none() {
        return Err(ApiError::validation("Page is out of range"));
    }
    Ok((page, size))
}
