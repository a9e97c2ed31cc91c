use sea_orm::entity::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FilmWorkType {
    #[sea_orm(string_value = "movie")]
    Movie,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "film_work")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<TimeDate>,
    pub certificate: Option<String>,
    pub file_path: Option<String>,
    pub rating: Option<f64>,
    pub r#type: FilmWorkType,
    pub created: TimeDateTimeWithTimeZone,
    pub modified: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::genre_film_work::Entity")]
    GenreFilmWork,
    #[sea_orm(has_many = "super::person_film_work::Entity")]
    PersonFilmWork,
}

impl Related<super::genre_film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenreFilmWork.def()
    }
}

impl Related<super::person_film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PersonFilmWork.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
