use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(uuid(Genre::Id).primary_key())
                    .col(text(Genre::Name))
                    .col(text_null(Genre::Description))
                    .col(timestamp_with_time_zone(Genre::Created))
                    .col(timestamp_with_time_zone(Genre::Modified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmWork::Table)
                    .if_not_exists()
                    .col(uuid(FilmWork::Id).primary_key())
                    .col(text(FilmWork::Title))
                    .col(text_null(FilmWork::Description))
                    .col(date_null(FilmWork::CreationDate))
                    .col(text_null(FilmWork::Certificate))
                    .col(text_null(FilmWork::FilePath))
                    .col(double_null(FilmWork::Rating))
                    .col(text(FilmWork::Type))
                    .col(timestamp_with_time_zone(FilmWork::Created))
                    .col(timestamp_with_time_zone(FilmWork::Modified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(uuid(Person::Id).primary_key())
                    .col(text(Person::FullName))
                    .col(date_null(Person::BirthDate))
                    .col(timestamp_with_time_zone(Person::Created))
                    .col(timestamp_with_time_zone(Person::Modified))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GenreFilmWork::Table)
                    .if_not_exists()
                    .col(uuid(GenreFilmWork::Id).primary_key())
                    .col(uuid(GenreFilmWork::FilmWorkId))
                    .col(uuid(GenreFilmWork::GenreId))
                    .col(timestamp_with_time_zone(GenreFilmWork::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_film_work_film_work")
                            .from(GenreFilmWork::Table, GenreFilmWork::FilmWorkId)
                            .to(FilmWork::Table, FilmWork::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_film_work_genre")
                            .from(GenreFilmWork::Table, GenreFilmWork::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PersonFilmWork::Table)
                    .if_not_exists()
                    .col(uuid(PersonFilmWork::Id).primary_key())
                    .col(uuid(PersonFilmWork::FilmWorkId))
                    .col(uuid(PersonFilmWork::PersonId))
                    .col(text(PersonFilmWork::Role))
                    .col(timestamp_with_time_zone(PersonFilmWork::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_film_work_film_work")
                            .from(PersonFilmWork::Table, PersonFilmWork::FilmWorkId)
                            .to(FilmWork::Table, FilmWork::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_film_work_person")
                            .from(PersonFilmWork::Table, PersonFilmWork::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PersonFilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(GenreFilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Person::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(FilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genre::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Name,
    Description,
    Created,
    Modified,
}

#[derive(DeriveIden)]
enum FilmWork {
    Table,
    Id,
    Title,
    Description,
    CreationDate,
    Certificate,
    FilePath,
    Rating,
    Type,
    Created,
    Modified,
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
    FullName,
    BirthDate,
    Created,
    Modified,
}

#[derive(DeriveIden)]
enum GenreFilmWork {
    Table,
    Id,
    FilmWorkId,
    GenreId,
    Created,
}

#[derive(DeriveIden)]
enum PersonFilmWork {
    Table,
    Id,
    FilmWorkId,
    PersonId,
    Role,
    Created,
}
