//! 课表条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetable_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub semester_id: i64,
    pub class_room_id: i64,
    pub teacher_id: i64,
    pub time_slot_id: i64,
    pub day_of_week: i16,
    pub subject: String,
    pub special_location_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::semesters::Entity",
        from = "Column::SemesterId",
        to = "super::semesters::Column::Id"
    )]
    Semester,
    #[sea_orm(
        belongs_to = "super::class_rooms::Entity",
        from = "Column::ClassRoomId",
        to = "super::class_rooms::Column::Id"
    )]
    ClassRoom,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::time_slots::Entity",
        from = "Column::TimeSlotId",
        to = "super::time_slots::Column::Id"
    )]
    TimeSlot,
    #[sea_orm(
        belongs_to = "super::special_locations::Entity",
        from = "Column::SpecialLocationId",
        to = "super::special_locations::Column::Id"
    )]
    SpecialLocation,
}

impl Related<super::semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::class_rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassRoom.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::time_slots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlot.def()
    }
}

impl Related<super::special_locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpecialLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_timetable_entry(self) -> crate::models::timetable::entities::TimetableEntry {
        use chrono::{DateTime, Utc};

        crate::models::timetable::entities::TimetableEntry {
            id: self.id,
            semester_id: self.semester_id,
            class_room_id: self.class_room_id,
            teacher_id: self.teacher_id,
            time_slot_id: self.time_slot_id,
            day_of_week: self.day_of_week,
            subject: self.subject,
            special_location_id: self.special_location_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
