//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub grade_level_id: i64,
    pub homeroom_teacher_id: Option<i64>,
    pub capacity: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grade_levels::Entity",
        from = "Column::GradeLevelId",
        to = "super::grade_levels::Column::Id"
    )]
    GradeLevel,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::HomeroomTeacherId",
        to = "super::teachers::Column::Id"
    )]
    HomeroomTeacher,
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
    #[sea_orm(has_many = "super::timetable_entries::Entity")]
    TimetableEntries,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::grade_levels::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradeLevel.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_class_room(self) -> crate::models::academic::entities::ClassRoom {
        use chrono::{DateTime, Utc};

        crate::models::academic::entities::ClassRoom {
            id: self.id,
            name: self.name,
            grade_level_id: self.grade_level_id,
            homeroom_teacher_id: self.homeroom_teacher_id,
            capacity: self.capacity,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
