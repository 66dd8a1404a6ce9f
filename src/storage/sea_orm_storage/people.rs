//! 学生/教师/家长档案存储操作

use super::SeaOrmStorage;
use crate::entity::parent_students::{
    ActiveModel as LinkActiveModel, Column as LinkColumn, Entity as ParentStudents,
};
use crate::entity::parents::{
    ActiveModel as ParentActiveModel, Column as ParentColumn, Entity as Parents,
};
use crate::entity::students::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Students,
};
use crate::entity::teachers::{
    ActiveModel as TeacherActiveModel, Column as TeacherColumn, Entity as Teachers,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    people::{
        entities::{Parent, ParentStudentLink, Student, Teacher},
        requests::{
            CreateParentRequest, CreateStudentRequest, CreateTeacherRequest, StudentListQuery,
            UpdateParentRequest, UpdateStudentRequest, UpdateTeacherRequest,
        },
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建学生档案
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = StudentActiveModel {
            user_id: Set(req.user_id),
            student_number: Set(req.student_number),
            class_room_id: Set(req.class_room_id),
            date_of_birth: Set(req.date_of_birth),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建学生档案失败: {e}")))?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过账号 ID 获取学生档案
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(StudentColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生，scope 为访问策略限定的学生 ID 集合
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
        scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<Student>> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 访问策略限定
        if let Some(ids) = scope {
            select = select.filter(StudentColumn::Id.is_in(ids));
        }

        // 班级筛选
        if let Some(class_room_id) = query.class_room_id {
            select = select.filter(StudentColumn::ClassRoomId.eq(class_room_id));
        }

        // 搜索条件：学号
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(StudentColumn::StudentNumber.contains(&escaped));
        }

        select = select.order_by_asc(StudentColumn::StudentNumber);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSystemError::database_operation(format!("查询学生列表失败: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = StudentActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(student_number) = update.student_number {
            model.student_number = Set(student_number);
        }

        if let Some(class_room_id) = update.class_room_id {
            model.class_room_id = Set(Some(class_room_id));
        }

        if let Some(date_of_birth) = update.date_of_birth {
            model.date_of_birth = Set(Some(date_of_birth));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新学生档案失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除学生档案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 查询学生集合对应的班级 ID（去重，忽略未分班学生）
    pub async fn list_class_room_ids_of_students_impl(
        &self,
        student_ids: &[i64],
    ) -> Result<Vec<i64>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<Option<i64>> = Students::find()
            .select_only()
            .column(StudentColumn::ClassRoomId)
            .filter(StudentColumn::Id.is_in(student_ids.to_vec()))
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生班级失败: {e}")))?;

        Ok(rows.into_iter().flatten().collect())
    }

    /// 创建教师档案
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = TeacherActiveModel {
            user_id: Set(req.user_id),
            subject: Set(req.subject),
            hire_date: Set(req.hire_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建教师档案失败: {e}")))?;

        Ok(result.into_teacher())
    }

    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师档案失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn get_teacher_by_user_id_impl(&self, user_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(TeacherColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师档案失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(TeacherColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = TeacherActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(subject) = update.subject {
            model.subject = Set(Some(subject));
        }

        if let Some(hire_date) = update.hire_date {
            model.hire_date = Set(Some(hire_date));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新教师档案失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除教师档案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建家长档案
    pub async fn create_parent_impl(&self, req: CreateParentRequest) -> Result<Parent> {
        let now = chrono::Utc::now().timestamp();

        let model = ParentActiveModel {
            user_id: Set(req.user_id),
            phone: Set(req.phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建家长档案失败: {e}")))?;

        Ok(result.into_parent())
    }

    pub async fn get_parent_by_id_impl(&self, id: i64) -> Result<Option<Parent>> {
        let result = Parents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询家长档案失败: {e}")))?;

        Ok(result.map(|m| m.into_parent()))
    }

    pub async fn get_parent_by_user_id_impl(&self, user_id: i64) -> Result<Option<Parent>> {
        let result = Parents::find()
            .filter(ParentColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询家长档案失败: {e}")))?;

        Ok(result.map(|m| m.into_parent()))
    }

    pub async fn list_parents_impl(&self) -> Result<Vec<Parent>> {
        let parents = Parents::find()
            .order_by_asc(ParentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询家长列表失败: {e}")))?;

        Ok(parents.into_iter().map(|m| m.into_parent()).collect())
    }

    pub async fn update_parent_impl(
        &self,
        id: i64,
        update: UpdateParentRequest,
    ) -> Result<Option<Parent>> {
        let existing = self.get_parent_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ParentActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新家长档案失败: {e}")))?;

        self.get_parent_by_id_impl(id).await
    }

    pub async fn delete_parent_impl(&self, id: i64) -> Result<bool> {
        let result = Parents::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除家长档案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 关联家长与学生，重复关联由唯一索引拦截
    pub async fn link_parent_student_impl(
        &self,
        parent_id: i64,
        student_id: i64,
    ) -> Result<ParentStudentLink> {
        let now = chrono::Utc::now().timestamp();

        let model = LinkActiveModel {
            parent_id: Set(parent_id),
            student_id: Set(student_id),
            linked_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("关联家长学生失败: {e}")))?;

        Ok(result.into_link())
    }

    pub async fn unlink_parent_student_impl(&self, parent_id: i64, student_id: i64) -> Result<bool> {
        let result = ParentStudents::delete_many()
            .filter(LinkColumn::ParentId.eq(parent_id))
            .filter(LinkColumn::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("解除关联失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出家长名下的学生档案
    pub async fn list_children_of_parent_impl(&self, parent_id: i64) -> Result<Vec<Student>> {
        let ids = self.list_child_ids_of_parent_impl(parent_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let students = Students::find()
            .filter(StudentColumn::Id.is_in(ids))
            .order_by_asc(StudentColumn::StudentNumber)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询子女列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 家长可见的学生 ID 集合（访问策略用）
    pub async fn list_child_ids_of_parent_impl(&self, parent_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = ParentStudents::find()
            .select_only()
            .column(LinkColumn::StudentId)
            .filter(LinkColumn::ParentId.eq(parent_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询子女关联失败: {e}")))?;

        Ok(ids)
    }
}
