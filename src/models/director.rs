use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::directors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub id: String,
    pub first_name: String,
    pub second_name: String,
    pub birth_date: NaiveDate,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorInput {
    pub first_name: String,
    pub second_name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Director {
    #[must_use]
    pub fn from_input(id: String, input: DirectorInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            second_name: input.second_name,
            birth_date: input.birth_date,
            bio: input.bio,
        }
    }
}

impl From<directors::Model> for Director {
    fn from(model: directors::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            second_name: model.second_name,
            birth_date: model.birth_date,
            bio: model.bio,
        }
    }
}
