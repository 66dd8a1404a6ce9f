//! 课表与冲突检测存储操作

use super::SeaOrmStorage;
use crate::entity::special_locations::{
    ActiveModel as LocationActiveModel, Column as LocationColumn, Entity as SpecialLocations,
};
use crate::entity::time_slots::{
    ActiveModel as SlotActiveModel, Column as SlotColumn, Entity as TimeSlots,
};
use crate::entity::timetable_entries::{
    ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as TimetableEntries,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::timetable::{
    entities::{SpecialLocation, TimeSlot, TimetableEntry},
    requests::{
        CreateSpecialLocationRequest, CreateTimeSlotRequest, CreateTimetableEntryRequest,
        TimetableListQuery, UpdateTimetableEntryRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建节次
    pub async fn create_time_slot_impl(&self, req: CreateTimeSlotRequest) -> Result<TimeSlot> {
        let model = SlotActiveModel {
            label: Set(req.label),
            starts_at: Set(req.starts_at),
            ends_at: Set(req.ends_at),
            sort_order: Set(req.sort_order.unwrap_or(0)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建节次失败: {e}")))?;

        Ok(result.into_time_slot())
    }

    pub async fn list_time_slots_impl(&self) -> Result<Vec<TimeSlot>> {
        let slots = TimeSlots::find()
            .order_by_asc(SlotColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询节次列表失败: {e}")))?;

        Ok(slots.into_iter().map(|m| m.into_time_slot()).collect())
    }

    pub async fn delete_time_slot_impl(&self, id: i64) -> Result<bool> {
        let result = TimeSlots::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除节次失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建功能教室
    pub async fn create_special_location_impl(
        &self,
        req: CreateSpecialLocationRequest,
    ) -> Result<SpecialLocation> {
        let model = LocationActiveModel {
            name: Set(req.name),
            capacity: Set(req.capacity),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建功能教室失败: {e}")))?;

        Ok(result.into_special_location())
    }

    pub async fn list_special_locations_impl(&self) -> Result<Vec<SpecialLocation>> {
        let locations = SpecialLocations::find()
            .order_by_asc(LocationColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSystemError::database_operation(format!("查询功能教室列表失败: {e}"))
            })?;

        Ok(locations
            .into_iter()
            .map(|m| m.into_special_location())
            .collect())
    }

    pub async fn delete_special_location_impl(&self, id: i64) -> Result<bool> {
        let result = SpecialLocations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除功能教室失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建课表条目
    pub async fn create_timetable_entry_impl(
        &self,
        semester_id: i64,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry> {
        let now = chrono::Utc::now().timestamp();

        let model = EntryActiveModel {
            semester_id: Set(semester_id),
            class_room_id: Set(req.class_room_id),
            teacher_id: Set(req.teacher_id),
            time_slot_id: Set(req.time_slot_id),
            day_of_week: Set(req.day_of_week),
            subject: Set(req.subject),
            special_location_id: Set(req.special_location_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建课表条目失败: {e}")))?;

        Ok(result.into_timetable_entry())
    }

    pub async fn get_timetable_entry_by_id_impl(&self, id: i64) -> Result<Option<TimetableEntry>> {
        let result = TimetableEntries::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课表条目失败: {e}")))?;

        Ok(result.map(|m| m.into_timetable_entry()))
    }

    /// 列出学期内课表条目
    pub async fn list_timetable_entries_impl(
        &self,
        semester_id: i64,
        query: TimetableListQuery,
    ) -> Result<Vec<TimetableEntry>> {
        let mut select = TimetableEntries::find().filter(EntryColumn::SemesterId.eq(semester_id));

        if let Some(class_room_id) = query.class_room_id {
            select = select.filter(EntryColumn::ClassRoomId.eq(class_room_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(EntryColumn::TeacherId.eq(teacher_id));
        }

        if let Some(day_of_week) = query.day_of_week {
            select = select.filter(EntryColumn::DayOfWeek.eq(day_of_week));
        }

        let entries = select
            .order_by_asc(EntryColumn::DayOfWeek)
            .order_by_asc(EntryColumn::TimeSlotId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询课表失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|m| m.into_timetable_entry())
            .collect())
    }

    pub async fn update_timetable_entry_impl(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>> {
        let existing = self.get_timetable_entry_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = EntryActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(class_room_id) = update.class_room_id {
            model.class_room_id = Set(class_room_id);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        if let Some(time_slot_id) = update.time_slot_id {
            model.time_slot_id = Set(time_slot_id);
        }

        if let Some(day_of_week) = update.day_of_week {
            model.day_of_week = Set(day_of_week);
        }

        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }

        if let Some(special_location_id) = update.special_location_id {
            model.special_location_id = Set(Some(special_location_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新课表条目失败: {e}")))?;

        self.get_timetable_entry_by_id_impl(id).await
    }

    pub async fn delete_timetable_entry_impl(&self, id: i64) -> Result<bool> {
        let result = TimetableEntries::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除课表条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 教室占用冲突：同学期、同天、同节次、同功能教室的条目。
    /// exclude_class_id 用于编辑场景排除本班已有条目。
    pub async fn find_room_conflicts_impl(
        &self,
        semester_id: i64,
        room_id: i64,
        day_of_week: i16,
        time_slot_id: i64,
        exclude_class_id: Option<i64>,
    ) -> Result<Vec<TimetableEntry>> {
        let mut select = TimetableEntries::find()
            .filter(EntryColumn::SemesterId.eq(semester_id))
            .filter(EntryColumn::DayOfWeek.eq(day_of_week))
            .filter(EntryColumn::TimeSlotId.eq(time_slot_id))
            .filter(EntryColumn::SpecialLocationId.eq(room_id));

        if let Some(class_id) = exclude_class_id {
            select = select.filter(EntryColumn::ClassRoomId.ne(class_id));
        }

        let entries = select
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教室冲突失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|m| m.into_timetable_entry())
            .collect())
    }

    /// 教师占用冲突：同学期、同天、同节次该教师已有的条目
    pub async fn find_teacher_conflicts_impl(
        &self,
        semester_id: i64,
        teacher_id: i64,
        day_of_week: i16,
        time_slot_id: i64,
        exclude_class_id: Option<i64>,
    ) -> Result<Vec<TimetableEntry>> {
        let mut select = TimetableEntries::find()
            .filter(EntryColumn::SemesterId.eq(semester_id))
            .filter(EntryColumn::DayOfWeek.eq(day_of_week))
            .filter(EntryColumn::TimeSlotId.eq(time_slot_id))
            .filter(EntryColumn::TeacherId.eq(teacher_id));

        if let Some(class_id) = exclude_class_id {
            select = select.filter(EntryColumn::ClassRoomId.ne(class_id));
        }

        let entries = select
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师冲突失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|m| m.into_timetable_entry())
            .collect())
    }
}
