use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: Option<TimeDate>,
    pub created: TimeDateTimeWithTimeZone,
    pub modified: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::person_film_work::Entity")]
    PersonFilmWork,
}

impl Related<super::person_film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PersonFilmWork.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
