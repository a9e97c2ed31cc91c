use sea_orm::entity::prelude::*;

/// Credit a person holds on a film. Stored as lowercase text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Role {
    #[sea_orm(string_value = "actor")]
    Actor,
    #[sea_orm(string_value = "writer")]
    Writer,
    #[sea_orm(string_value = "director")]
    Director,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "person_film_work")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub film_work_id: Uuid,
    pub person_id: Uuid,
    pub role: Role,
    pub created: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::film_work::Entity",
        from = "Column::FilmWorkId",
        to = "super::film_work::Column::Id"
    )]
    FilmWork,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id"
    )]
    Person,
}

impl Related<super::film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmWork.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
