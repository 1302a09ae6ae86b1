use crate::db::StoreError;
use crate::entities::{directors, prelude::*};
use crate::models::Director;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

pub struct DirectorRepository {
    conn: DatabaseConnection,
}

impl DirectorRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Director>, StoreError> {
        let row = Directors::find_by_id(id.to_string())
            .one(&self.conn)
            .await?;
        Ok(row.map(Director::from))
    }

    pub async fn add(&self, director: &Director) -> Result<(), StoreError> {
        let active_model = directors::ActiveModel {
            id: Set(director.id.clone()),
            first_name: Set(director.first_name.clone()),
            second_name: Set(director.second_name.clone()),
            birth_date: Set(director.birth_date),
            bio: Set(director.bio.clone()),
        };

        Directors::insert(active_model)
            .exec_without_returning(&self.conn)
            .await
            .map_err(StoreError::from_write)?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = Directors::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
