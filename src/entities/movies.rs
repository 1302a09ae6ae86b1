use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub release_date: Date,

    pub genre: String,

    pub rating: f64,

    /// `tt` followed by 7 or 8 digits; unique across all movies.
    #[sea_orm(unique)]
    pub imdb_id: String,

    /// Not a foreign key; existence is checked by the catalog service.
    pub director_id: String,

    /// Lower-cased `title`, written alongside it and used for search.
    pub title_folded: String,

    pub genre_folded: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
