//! 学年/学期/年级/班级存储操作

use super::SeaOrmStorage;
use crate::entity::academic_years::{
    ActiveModel as YearActiveModel, Column as YearColumn, Entity as AcademicYears,
};
use crate::entity::class_rooms::{
    ActiveModel as ClassRoomActiveModel, Column as ClassRoomColumn, Entity as ClassRooms,
};
use crate::entity::grade_levels::{
    ActiveModel as GradeLevelActiveModel, Column as GradeLevelColumn, Entity as GradeLevels,
};
use crate::entity::semesters::{
    ActiveModel as SemesterActiveModel, Column as SemesterColumn, Entity as Semesters,
};
use crate::errors::{Result, SchoolSystemError};
use crate::models::academic::{
    entities::{AcademicYear, ClassRoom, GradeLevel, Semester},
    requests::{
        ClassRoomListQuery, CreateAcademicYearRequest, CreateClassRoomRequest,
        CreateGradeLevelRequest, CreateSemesterRequest, UpdateAcademicYearRequest,
        UpdateClassRoomRequest, UpdateSemesterRequest,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, JoinType,
    QuerySelect, RelationTrait,
};

impl SeaOrmStorage {
    /// 创建学年，is_active 为 true 时独占激活
    pub async fn create_academic_year_impl(
        &self,
        req: CreateAcademicYearRequest,
    ) -> Result<AcademicYear> {
        let model = YearActiveModel {
            name: Set(req.name),
            starts_on: Set(req.starts_on),
            ends_on: Set(req.ends_on),
            is_active: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建学年失败: {e}")))?;

        if req.is_active {
            self.activate_academic_year_impl(result.id).await?;
            return Ok(self
                .get_academic_year_by_id_impl(result.id)
                .await?
                .unwrap_or_else(|| result.into_academic_year()));
        }

        Ok(result.into_academic_year())
    }

    pub async fn get_academic_year_by_id_impl(&self, id: i64) -> Result<Option<AcademicYear>> {
        let result = AcademicYears::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(result.map(|m| m.into_academic_year()))
    }

    /// 获取当前激活学年
    pub async fn get_active_academic_year_impl(&self) -> Result<Option<AcademicYear>> {
        let result = AcademicYears::find()
            .filter(YearColumn::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询激活学年失败: {e}")))?;

        Ok(result.map(|m| m.into_academic_year()))
    }

    pub async fn list_academic_years_impl(&self) -> Result<Vec<AcademicYear>> {
        let years = AcademicYears::find()
            .order_by_desc(YearColumn::StartsOn)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学年列表失败: {e}")))?;

        Ok(years.into_iter().map(|m| m.into_academic_year()).collect())
    }

    pub async fn update_academic_year_impl(
        &self,
        id: i64,
        update: UpdateAcademicYearRequest,
    ) -> Result<Option<AcademicYear>> {
        let existing = self.get_academic_year_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = YearActiveModel {
            id: Set(id),
            ..Default::default()
        };
        let mut dirty = false;

        if let Some(name) = update.name {
            model.name = Set(name);
            dirty = true;
        }

        if let Some(starts_on) = update.starts_on {
            model.starts_on = Set(starts_on);
            dirty = true;
        }

        if let Some(ends_on) = update.ends_on {
            model.ends_on = Set(ends_on);
            dirty = true;
        }

        // 只改激活状态时没有需要更新的列
        if dirty {
            model
                .update(&self.db)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("更新学年失败: {e}")))?;
        }

        // 激活状态单独处理，保证独占
        match update.is_active {
            Some(true) => {
                self.activate_academic_year_impl(id).await?;
            }
            Some(false) => {
                AcademicYears::update_many()
                    .col_expr(YearColumn::IsActive, Expr::value(false))
                    .filter(YearColumn::Id.eq(id))
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        SchoolSystemError::database_operation(format!("取消激活学年失败: {e}"))
                    })?;
            }
            None => {}
        }

        self.get_academic_year_by_id_impl(id).await
    }

    pub async fn delete_academic_year_impl(&self, id: i64) -> Result<bool> {
        let result = AcademicYears::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除学年失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 独占激活学年：先全部取消再激活目标
    pub async fn activate_academic_year_impl(&self, id: i64) -> Result<bool> {
        AcademicYears::update_many()
            .col_expr(YearColumn::IsActive, Expr::value(false))
            .filter(YearColumn::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("取消激活学年失败: {e}")))?;

        let result = AcademicYears::update_many()
            .col_expr(YearColumn::IsActive, Expr::value(true))
            .filter(YearColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("激活学年失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建学期
    pub async fn create_semester_impl(&self, req: CreateSemesterRequest) -> Result<Semester> {
        let model = SemesterActiveModel {
            academic_year_id: Set(req.academic_year_id),
            name: Set(req.name),
            starts_on: Set(req.starts_on),
            ends_on: Set(req.ends_on),
            is_active: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建学期失败: {e}")))?;

        if req.is_active {
            self.activate_semester_impl(result.id).await?;
            return Ok(self
                .get_semester_by_id_impl(result.id)
                .await?
                .unwrap_or_else(|| result.into_semester()));
        }

        Ok(result.into_semester())
    }

    pub async fn get_semester_by_id_impl(&self, id: i64) -> Result<Option<Semester>> {
        let result = Semesters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学期失败: {e}")))?;

        Ok(result.map(|m| m.into_semester()))
    }

    /// 获取当前激活学期
    pub async fn get_active_semester_impl(&self) -> Result<Option<Semester>> {
        let result = Semesters::find()
            .filter(SemesterColumn::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询激活学期失败: {e}")))?;

        Ok(result.map(|m| m.into_semester()))
    }

    pub async fn list_semesters_impl(&self, academic_year_id: Option<i64>) -> Result<Vec<Semester>> {
        let mut select = Semesters::find();

        if let Some(year_id) = academic_year_id {
            select = select.filter(SemesterColumn::AcademicYearId.eq(year_id));
        }

        let semesters = select
            .order_by_desc(SemesterColumn::StartsOn)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(semesters.into_iter().map(|m| m.into_semester()).collect())
    }

    pub async fn update_semester_impl(
        &self,
        id: i64,
        update: UpdateSemesterRequest,
    ) -> Result<Option<Semester>> {
        let existing = self.get_semester_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = SemesterActiveModel {
            id: Set(id),
            ..Default::default()
        };
        let mut dirty = false;

        if let Some(name) = update.name {
            model.name = Set(name);
            dirty = true;
        }

        if let Some(starts_on) = update.starts_on {
            model.starts_on = Set(starts_on);
            dirty = true;
        }

        if let Some(ends_on) = update.ends_on {
            model.ends_on = Set(ends_on);
            dirty = true;
        }

        if dirty {
            model
                .update(&self.db)
                .await
                .map_err(|e| SchoolSystemError::database_operation(format!("更新学期失败: {e}")))?;
        }

        match update.is_active {
            Some(true) => {
                self.activate_semester_impl(id).await?;
            }
            Some(false) => {
                Semesters::update_many()
                    .col_expr(SemesterColumn::IsActive, Expr::value(false))
                    .filter(SemesterColumn::Id.eq(id))
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        SchoolSystemError::database_operation(format!("取消激活学期失败: {e}"))
                    })?;
            }
            None => {}
        }

        self.get_semester_by_id_impl(id).await
    }

    pub async fn delete_semester_impl(&self, id: i64) -> Result<bool> {
        let result = Semesters::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除学期失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 独占激活学期（全系统只有一个激活学期）
    pub async fn activate_semester_impl(&self, id: i64) -> Result<bool> {
        Semesters::update_many()
            .col_expr(SemesterColumn::IsActive, Expr::value(false))
            .filter(SemesterColumn::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("取消激活学期失败: {e}")))?;

        let result = Semesters::update_many()
            .col_expr(SemesterColumn::IsActive, Expr::value(true))
            .filter(SemesterColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("激活学期失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建年级，level 重复由唯一约束拦截
    pub async fn create_grade_level_impl(&self, req: CreateGradeLevelRequest) -> Result<GradeLevel> {
        let model = GradeLevelActiveModel {
            level: Set(req.level),
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建年级失败: {e}")))?;

        Ok(result.into_grade_level())
    }

    pub async fn get_grade_level_by_id_impl(&self, id: i64) -> Result<Option<GradeLevel>> {
        let result = GradeLevels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade_level()))
    }

    pub async fn list_grade_levels_impl(&self) -> Result<Vec<GradeLevel>> {
        let levels = GradeLevels::find()
            .order_by_asc(GradeLevelColumn::Level)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询年级列表失败: {e}")))?;

        Ok(levels.into_iter().map(|m| m.into_grade_level()).collect())
    }

    pub async fn delete_grade_level_impl(&self, id: i64) -> Result<bool> {
        let result = GradeLevels::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除年级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建班级
    pub async fn create_class_room_impl(&self, req: CreateClassRoomRequest) -> Result<ClassRoom> {
        let now = chrono::Utc::now().timestamp();

        let model = ClassRoomActiveModel {
            name: Set(req.name),
            grade_level_id: Set(req.grade_level_id),
            homeroom_teacher_id: Set(req.homeroom_teacher_id),
            capacity: Set(req.capacity.unwrap_or(40)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class_room())
    }

    pub async fn get_class_room_by_id_impl(&self, id: i64) -> Result<Option<ClassRoom>> {
        let result = ClassRooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class_room()))
    }

    /// 列出班级，支持按年级序号过滤
    pub async fn list_class_rooms_impl(&self, query: ClassRoomListQuery) -> Result<Vec<ClassRoom>> {
        let mut select = ClassRooms::find();

        // 按年级序号过滤需要联表
        if let Some(level) = query.grade_level {
            select = select
                .join(
                    JoinType::InnerJoin,
                    crate::entity::class_rooms::Relation::GradeLevel.def(),
                )
                .filter(GradeLevelColumn::Level.eq(level));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(ClassRoomColumn::Name.contains(&escaped));
        }

        let rooms = select
            .order_by_asc(ClassRoomColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(rooms.into_iter().map(|m| m.into_class_room()).collect())
    }

    pub async fn update_class_room_impl(
        &self,
        id: i64,
        update: UpdateClassRoomRequest,
    ) -> Result<Option<ClassRoom>> {
        let existing = self.get_class_room_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ClassRoomActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(grade_level_id) = update.grade_level_id {
            model.grade_level_id = Set(grade_level_id);
        }

        if let Some(homeroom_teacher_id) = update.homeroom_teacher_id {
            model.homeroom_teacher_id = Set(Some(homeroom_teacher_id));
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_room_by_id_impl(id).await
    }

    pub async fn delete_class_room_impl(&self, id: i64) -> Result<bool> {
        let result = ClassRooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
