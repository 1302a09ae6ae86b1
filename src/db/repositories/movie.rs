use crate::db::StoreError;
use crate::entities::{movies, prelude::*};
use crate::models::Movie;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let row = Movies::find_by_id(id.to_string()).one(&self.conn).await?;
        Ok(row.map(Movie::from))
    }

    pub async fn get_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, StoreError> {
        let row = Movies::find()
            .filter(movies::Column::ImdbId.eq(imdb_id))
            .one(&self.conn)
            .await?;
        Ok(row.map(Movie::from))
    }

    /// Returns one page of movies plus the total number of matches.
    ///
    /// `search` matches title or genre as a case-insensitive substring. Case is
    /// folded in Rust on both sides, since SQLite's `lower()` and `LIKE` only
    /// fold ASCII.
    pub async fn list_paged(
        &self,
        page: u64,
        size: u64,
        search: Option<&str>,
    ) -> Result<(Vec<Movie>, u64), StoreError> {
        let mut query = Movies::find();

        if let Some(term) = search.filter(|t| !t.trim().is_empty()) {
            let pattern = contains_pattern(term);
            query = query.filter(
                Condition::any()
                    .add(folded_like(movies::Column::TitleFolded, &pattern))
                    .add(folded_like(movies::Column::GenreFolded, &pattern)),
            );
        }

        let total = query.clone().count(&self.conn).await?;

        let Some(offset) = page_offset(page, size) else {
            debug!(page, size, total, "Requested page lies past any addressable row");
            return Ok((Vec::new(), total));
        };

        let rows = query
            .order_by_asc(movies::Column::Title)
            .order_by_asc(movies::Column::Id)
            .offset(offset)
            .limit(size)
            .all(&self.conn)
            .await?;

        Ok((rows.into_iter().map(Movie::from).collect(), total))
    }

    pub async fn add(&self, movie: &Movie) -> Result<(), StoreError> {
        Movies::insert(to_active_model(movie))
            .exec_without_returning(&self.conn)
            .await
            .map_err(StoreError::from_write)?;
        Ok(())
    }

    /// Full replace by identifier.
    pub async fn update(&self, movie: &Movie) -> Result<(), StoreError> {
        let result = Movies::update_many()
            .set(to_active_model(movie))
            .filter(movies::Column::Id.eq(&movie.id))
            .exec(&self.conn)
            .await
            .map_err(StoreError::from_write)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(format!("Movie {}", movie.id)));
        }
        Ok(())
    }

    /// Returns whether a row was removed. Deleting an absent id is not an error.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = Movies::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn exists_by_director_id(&self, director_id: &str) -> Result<bool, StoreError> {
        let row = Movies::find()
            .filter(movies::Column::DirectorId.eq(director_id))
            .one(&self.conn)
            .await?;
        Ok(row.is_some())
    }
}

/// Row offset of a 1-based page. `None` when the offset or the page size
/// cannot be bound as a signed 64-bit SQL integer.
#[must_use]
pub fn page_offset(page: u64, size: u64) -> Option<u64> {
    let offset = page.saturating_sub(1).checked_mul(size)?;
    (i64::try_from(offset).is_ok() && i64::try_from(size).is_ok()).then_some(offset)
}

fn to_active_model(movie: &Movie) -> movies::ActiveModel {
    movies::ActiveModel {
        id: Set(movie.id.clone()),
        title: Set(movie.title.clone()),
        description: Set(movie.description.clone()),
        release_date: Set(movie.release_date),
        genre: Set(movie.genre.clone()),
        rating: Set(movie.rating),
        imdb_id: Set(movie.imdb_id.clone()),
        director_id: Set(movie.director_id.clone()),
        title_folded: Set(fold_case(&movie.title)),
        genre_folded: Set(fold_case(&movie.genre)),
    }
}

fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

fn folded_like(column: movies::Column, pattern: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::col(column).like(LikeExpr::new(pattern).escape('\\'))
}

/// Builds a `%term%` pattern with LIKE wildcards in the term escaped, so the
/// term is matched literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in fold_case(term).chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
