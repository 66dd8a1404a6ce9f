//! 年级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grade_levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub level: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_rooms::Entity")]
    ClassRooms,
}

impl Related<super::class_rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassRooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade_level(self) -> crate::models::academic::entities::GradeLevel {
        crate::models::academic::entities::GradeLevel {
            id: self.id,
            level: self.level,
            name: self.name,
        }
    }
}
