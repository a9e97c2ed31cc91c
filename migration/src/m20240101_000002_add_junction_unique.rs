use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A person may hold several roles on one film, hence role in the key.
        manager
            .create_index(
                Index::create()
                    .name("film_work_person_role")
                    .table(PersonFilmWork::Table)
                    .col(PersonFilmWork::FilmWorkId)
                    .col(PersonFilmWork::PersonId)
                    .col(PersonFilmWork::Role)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("film_work_genre")
                    .table(GenreFilmWork::Table)
                    .col(GenreFilmWork::FilmWorkId)
                    .col(GenreFilmWork::GenreId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop().name("film_work_genre").table(GenreFilmWork::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("film_work_person_role").table(PersonFilmWork::Table).to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PersonFilmWork {
    Table,
    FilmWorkId,
    PersonId,
    Role,
}

#[derive(DeriveIden)]
enum GenreFilmWork {
    Table,
    FilmWorkId,
    GenreId,
}
