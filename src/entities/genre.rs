use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "genre")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created: TimeDateTimeWithTimeZone,
    pub modified: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::genre_film_work::Entity")]
    GenreFilmWork,
}

impl Related<super::genre_film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenreFilmWork.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
