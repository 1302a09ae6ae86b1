use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Directors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Directors::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Directors::FirstName).string().not_null())
                    .col(ColumnDef::new(Directors::SecondName).string().not_null())
                    .col(ColumnDef::new(Directors::BirthDate).date().not_null())
                    .col(ColumnDef::new(Directors::Bio).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::Description).text().null())
                    .col(ColumnDef::new(Movies::ReleaseDate).date().not_null())
                    .col(ColumnDef::new(Movies::Genre).string().not_null())
                    .col(ColumnDef::new(Movies::Rating).double().not_null())
                    .col(ColumnDef::new(Movies::ImdbId).string().not_null())
                    .col(ColumnDef::new(Movies::DirectorId).string().not_null())
                    .col(ColumnDef::new(Movies::TitleFolded).string().not_null())
                    .col(ColumnDef::new(Movies::GenreFolded).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_imdb_id")
                    .table(Movies::Table)
                    .col(Movies::ImdbId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Backs the director deletion guard.
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_director_id")
                    .table(Movies::Table)
                    .col(Movies::DirectorId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_title")
                    .table(Movies::Table)
                    .col(Movies::Title)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Directors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Directors {
    Table,
    Id,
    FirstName,
    SecondName,
    BirthDate,
    Bio,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Description,
    ReleaseDate,
    Genre,
    Rating,
    ImdbId,
    DirectorId,
    TitleFolded,
    GenreFolded,
}
