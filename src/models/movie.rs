use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::movies;

/// A persisted movie. Also the snapshot shape stored in cached listing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub genre: String,
    pub rating: f64,
    pub imdb_id: String,
    pub director_id: String,
}

/// Every mutable field of a movie. Used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub genre: String,
    pub rating: f64,
    pub imdb_id: String,
    pub director_id: String,
}

impl Movie {
    #[must_use]
    pub fn from_input(id: String, input: MovieInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            release_date: input.release_date,
            genre: input.genre,
            rating: input.rating,
            imdb_id: input.imdb_id,
            director_id: input.director_id,
        }
    }

    /// Overwrites every field except the identifier.
    pub fn apply(&mut self, input: MovieInput) {
        self.title = input.title;
        self.description = input.description;
        self.release_date = input.release_date;
        self.genre = input.genre;
        self.rating = input.rating;
        self.imdb_id = input.imdb_id;
        self.director_id = input.director_id;
    }
}

impl From<movies::Model> for Movie {
    fn from(model: movies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            release_date: model.release_date,
            genre: model.genre,
            rating: model.rating,
            imdb_id: model.imdb_id,
            director_id: model.director_id,
        }
    }
}
