//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grade_records::{ActiveModel, Column, Entity as GradeRecords};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    grades::{
        entities::GradeRecord,
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 录入成绩，(student_id, assignment_id) 重复由唯一索引拦截
    pub async fn create_grade_impl(
        &self,
        graded_by: i64,
        req: CreateGradeRequest,
    ) -> Result<GradeRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            assignment_id: Set(req.assignment_id),
            score: Set(req.score),
            comment: Set(req.comment),
            graded_by: Set(graded_by),
            graded_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_grade_record())
    }

    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<GradeRecord>> {
        let result = GradeRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade_record()))
    }

    /// 分页列出成绩，student_scope 为访问策略限定的学生 ID 集合
    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListQuery,
        student_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<GradeRecord>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = GradeRecords::find();

        if let Some(ids) = student_scope {
            select = select.filter(Column::StudentId.is_in(ids));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        select = select.order_by_desc(Column::GradedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let grades = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询成绩列表失败: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: grades.into_iter().map(|m| m.into_grade_record()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<GradeRecord>> {
        let existing = self.get_grade_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            graded_at: Set(now),
            ..Default::default()
        };

        if let Some(score) = update.score {
            model.score = Set(score);
        }

        if let Some(comment) = update.comment {
            model.comment = Set(Some(comment));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = GradeRecords::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
