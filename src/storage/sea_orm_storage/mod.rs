//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod academic;
mod assignments;
mod attendance;
mod grades;
mod notifications;
mod people;
mod timetable;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse,
    academic::{
        entities::{AcademicYear, ClassRoom, GradeLevel, Semester},
        requests::{
            ClassRoomListQuery, CreateAcademicYearRequest, CreateClassRoomRequest,
            CreateGradeLevelRequest, CreateSemesterRequest, UpdateAcademicYearRequest,
            UpdateClassRoomRequest, UpdateSemesterRequest,
        },
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
    },
    grades::{
        entities::GradeRecord,
        requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest},
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
    },
    people::{
        entities::{Parent, ParentStudentLink, Student, Teacher},
        requests::{
            CreateParentRequest, CreateStudentRequest, CreateTeacherRequest, StudentListQuery,
            UpdateParentRequest, UpdateStudentRequest, UpdateTeacherRequest,
        },
    },
    timetable::{
        entities::{SpecialLocation, TimeSlot, TimetableEntry},
        requests::{
            CreateSpecialLocationRequest, CreateTimeSlotRequest, CreateTimetableEntryRequest,
            TimetableListQuery, UpdateTimetableEntryRequest,
        },
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学年模块
    async fn create_academic_year(&self, req: CreateAcademicYearRequest) -> Result<AcademicYear> {
        self.create_academic_year_impl(req).await
    }

    async fn get_academic_year_by_id(&self, id: i64) -> Result<Option<AcademicYear>> {
        self.get_academic_year_by_id_impl(id).await
    }

    async fn get_active_academic_year(&self) -> Result<Option<AcademicYear>> {
        self.get_active_academic_year_impl().await
    }

    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>> {
        self.list_academic_years_impl().await
    }

    async fn update_academic_year(
        &self,
        id: i64,
        update: UpdateAcademicYearRequest,
    ) -> Result<Option<AcademicYear>> {
        self.update_academic_year_impl(id, update).await
    }

    async fn delete_academic_year(&self, id: i64) -> Result<bool> {
        self.delete_academic_year_impl(id).await
    }

    async fn activate_academic_year(&self, id: i64) -> Result<bool> {
        self.activate_academic_year_impl(id).await
    }

    // 学期模块
    async fn create_semester(&self, req: CreateSemesterRequest) -> Result<Semester> {
        self.create_semester_impl(req).await
    }

    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>> {
        self.get_semester_by_id_impl(id).await
    }

    async fn get_active_semester(&self) -> Result<Option<Semester>> {
        self.get_active_semester_impl().await
    }

    async fn list_semesters(&self, academic_year_id: Option<i64>) -> Result<Vec<Semester>> {
        self.list_semesters_impl(academic_year_id).await
    }

    async fn update_semester(
        &self,
        id: i64,
        update: UpdateSemesterRequest,
    ) -> Result<Option<Semester>> {
        self.update_semester_impl(id, update).await
    }

    async fn delete_semester(&self, id: i64) -> Result<bool> {
        self.delete_semester_impl(id).await
    }

    async fn activate_semester(&self, id: i64) -> Result<bool> {
        self.activate_semester_impl(id).await
    }

    // 年级模块
    async fn create_grade_level(&self, req: CreateGradeLevelRequest) -> Result<GradeLevel> {
        self.create_grade_level_impl(req).await
    }

    async fn get_grade_level_by_id(&self, id: i64) -> Result<Option<GradeLevel>> {
        self.get_grade_level_by_id_impl(id).await
    }

    async fn list_grade_levels(&self) -> Result<Vec<GradeLevel>> {
        self.list_grade_levels_impl().await
    }

    async fn delete_grade_level(&self, id: i64) -> Result<bool> {
        self.delete_grade_level_impl(id).await
    }

    // 班级模块
    async fn create_class_room(&self, req: CreateClassRoomRequest) -> Result<ClassRoom> {
        self.create_class_room_impl(req).await
    }

    async fn get_class_room_by_id(&self, id: i64) -> Result<Option<ClassRoom>> {
        self.get_class_room_by_id_impl(id).await
    }

    async fn list_class_rooms(&self, query: ClassRoomListQuery) -> Result<Vec<ClassRoom>> {
        self.list_class_rooms_impl(query).await
    }

    async fn update_class_room(
        &self,
        id: i64,
        update: UpdateClassRoomRequest,
    ) -> Result<Option<ClassRoom>> {
        self.update_class_room_impl(id, update).await
    }

    async fn delete_class_room(&self, id: i64) -> Result<bool> {
        self.delete_class_room_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
        scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<Student>> {
        self.list_students_with_pagination_impl(query, scope).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn list_class_room_ids_of_students(&self, student_ids: &[i64]) -> Result<Vec<i64>> {
        self.list_class_room_ids_of_students_impl(student_ids).await
    }

    // 教师模块
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(req).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_user_id_impl(user_id).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 家长模块
    async fn create_parent(&self, req: CreateParentRequest) -> Result<Parent> {
        self.create_parent_impl(req).await
    }

    async fn get_parent_by_id(&self, id: i64) -> Result<Option<Parent>> {
        self.get_parent_by_id_impl(id).await
    }

    async fn get_parent_by_user_id(&self, user_id: i64) -> Result<Option<Parent>> {
        self.get_parent_by_user_id_impl(user_id).await
    }

    async fn list_parents(&self) -> Result<Vec<Parent>> {
        self.list_parents_impl().await
    }

    async fn update_parent(&self, id: i64, update: UpdateParentRequest) -> Result<Option<Parent>> {
        self.update_parent_impl(id, update).await
    }

    async fn delete_parent(&self, id: i64) -> Result<bool> {
        self.delete_parent_impl(id).await
    }

    async fn link_parent_student(
        &self,
        parent_id: i64,
        student_id: i64,
    ) -> Result<ParentStudentLink> {
        self.link_parent_student_impl(parent_id, student_id).await
    }

    async fn unlink_parent_student(&self, parent_id: i64, student_id: i64) -> Result<bool> {
        self.unlink_parent_student_impl(parent_id, student_id).await
    }

    async fn list_children_of_parent(&self, parent_id: i64) -> Result<Vec<Student>> {
        self.list_children_of_parent_impl(parent_id).await
    }

    async fn list_child_ids_of_parent(&self, parent_id: i64) -> Result<Vec<i64>> {
        self.list_child_ids_of_parent_impl(parent_id).await
    }

    // 节次与功能教室模块
    async fn create_time_slot(&self, req: CreateTimeSlotRequest) -> Result<TimeSlot> {
        self.create_time_slot_impl(req).await
    }

    async fn list_time_slots(&self) -> Result<Vec<TimeSlot>> {
        self.list_time_slots_impl().await
    }

    async fn delete_time_slot(&self, id: i64) -> Result<bool> {
        self.delete_time_slot_impl(id).await
    }

    async fn create_special_location(
        &self,
        req: CreateSpecialLocationRequest,
    ) -> Result<SpecialLocation> {
        self.create_special_location_impl(req).await
    }

    async fn list_special_locations(&self) -> Result<Vec<SpecialLocation>> {
        self.list_special_locations_impl().await
    }

    async fn delete_special_location(&self, id: i64) -> Result<bool> {
        self.delete_special_location_impl(id).await
    }

    // 课表模块
    async fn create_timetable_entry(
        &self,
        semester_id: i64,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry> {
        self.create_timetable_entry_impl(semester_id, req).await
    }

    async fn get_timetable_entry_by_id(&self, id: i64) -> Result<Option<TimetableEntry>> {
        self.get_timetable_entry_by_id_impl(id).await
    }

    async fn list_timetable_entries(
        &self,
        semester_id: i64,
        query: TimetableListQuery,
    ) -> Result<Vec<TimetableEntry>> {
        self.list_timetable_entries_impl(semester_id, query).await
    }

    async fn update_timetable_entry(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>> {
        self.update_timetable_entry_impl(id, update).await
    }

    async fn delete_timetable_entry(&self, id: i64) -> Result<bool> {
        self.delete_timetable_entry_impl(id).await
    }

    async fn find_room_conflicts(
        &self,
        semester_id: i64,
        room_id: i64,
        day_of_week: i16,
        time_slot_id: i64,
        exclude_class_id: Option<i64>,
    ) -> Result<Vec<TimetableEntry>> {
        self.find_room_conflicts_impl(
            semester_id,
            room_id,
            day_of_week,
            time_slot_id,
            exclude_class_id,
        )
        .await
    }

    async fn find_teacher_conflicts(
        &self,
        semester_id: i64,
        teacher_id: i64,
        day_of_week: i16,
        time_slot_id: i64,
        exclude_class_id: Option<i64>,
    ) -> Result<Vec<TimetableEntry>> {
        self.find_teacher_conflicts_impl(
            semester_id,
            teacher_id,
            day_of_week,
            time_slot_id,
            exclude_class_id,
        )
        .await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(teacher_id, req).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        class_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<Assignment>> {
        self.list_assignments_with_pagination_impl(query, class_scope)
            .await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 考勤模块
    async fn create_attendance(
        &self,
        recorded_by: i64,
        req: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord> {
        self.create_attendance_impl(recorded_by, req).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
        student_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<AttendanceRecord>> {
        self.list_attendance_with_pagination_impl(query, student_scope)
            .await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>> {
        self.update_attendance_impl(id, update).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    // 成绩模块
    async fn create_grade(&self, graded_by: i64, req: CreateGradeRequest) -> Result<GradeRecord> {
        self.create_grade_impl(graded_by, req).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<GradeRecord>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn list_grades_with_pagination(
        &self,
        query: GradeListQuery,
        student_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<GradeRecord>> {
        self.list_grades_with_pagination_impl(query, student_scope)
            .await
    }

    async fn update_grade(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<GradeRecord>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 通知模块
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification> {
        self.create_notification_impl(req).await
    }

    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>> {
        self.get_notification_by_id_impl(id).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>> {
        self.list_notifications_with_pagination_impl(user_id, query)
            .await
    }

    async fn mark_notification_read(&self, id: i64) -> Result<bool> {
        self.mark_notification_read_impl(id).await
    }

    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64> {
        self.get_unread_notification_count_impl(user_id).await
    }

    async fn delete_notification(&self, id: i64) -> Result<bool> {
        self.delete_notification_impl(id).await
    }
}
