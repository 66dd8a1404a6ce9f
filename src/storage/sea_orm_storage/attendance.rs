//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 登记考勤，(student_id, date) 重复由唯一索引拦截
    pub async fn create_attendance_impl(
        &self,
        recorded_by: i64,
        req: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            class_room_id: Set(req.class_room_id),
            date: Set(req.date),
            status: Set(req.status.to_string()),
            note: Set(req.note),
            recorded_by: Set(recorded_by),
            recorded_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("登记考勤失败: {e}")))?;

        Ok(result.into_attendance_record())
    }

    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        let result = AttendanceRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance_record()))
    }

    /// 分页列出考勤，student_scope 为访问策略限定的学生 ID 集合
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
        student_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<AttendanceRecord>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = AttendanceRecords::find();

        if let Some(ids) = student_scope {
            select = select.filter(Column::StudentId.is_in(ids));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(class_room_id) = query.class_room_id {
            select = select.filter(Column::ClassRoomId.eq(class_room_id));
        }

        if let Some(date) = query.date {
            select = select.filter(Column::Date.eq(date));
        }

        select = select.order_by_desc(Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤页数失败: {e}")))?;

        let records = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询考勤列表失败: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: records
                .into_iter()
                .map(|m| m.into_attendance_record())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = self.get_attendance_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        let mut dirty = false;

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
            dirty = true;
        }

        if let Some(note) = update.note {
            model.note = Set(Some(note));
            dirty = true;
        }

        // 空请求体不触发 UPDATE
        if dirty {
            model
                .update(&self.db)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("更新考勤失败: {e}")))?;
        }

        self.get_attendance_by_id_impl(id).await
    }

    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = AttendanceRecords::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除考勤失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
