//! 节次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "time_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub label: String,
    pub starts_at: String,
    pub ends_at: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timetable_entries::Entity")]
    TimetableEntries,
}

impl Related<super::timetable_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_time_slot(self) -> crate::models::timetable::entities::TimeSlot {
        crate::models::timetable::entities::TimeSlot {
            id: self.id,
            label: self.label,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            sort_order: self.sort_order,
        }
    }
}
