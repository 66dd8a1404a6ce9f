use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 统一的数据存储接口
///
/// 列表查询中的 `scope` 参数来自访问策略（services::access）：
/// `None` 表示不限制，`Some(ids)` 表示只能看到这些记录。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 学年管理方法
    async fn create_academic_year(&self, req: CreateAcademicYearRequest) -> Result<AcademicYear>;
    async fn get_academic_year_by_id(&self, id: i64) -> Result<Option<AcademicYear>>;
    // 获取当前激活学年
    async fn get_active_academic_year(&self) -> Result<Option<AcademicYear>>;
    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>>;
    async fn update_academic_year(
        &self,
        id: i64,
        update: UpdateAcademicYearRequest,
    ) -> Result<Option<AcademicYear>>;
    async fn delete_academic_year(&self, id: i64) -> Result<bool>;
    // 独占激活：目标学年置为激活，其余全部取消
    async fn activate_academic_year(&self, id: i64) -> Result<bool>;

    /// 学期管理方法
    async fn create_semester(&self, req: CreateSemesterRequest) -> Result<Semester>;
    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>>;
    // 获取当前激活学期
    async fn get_active_semester(&self) -> Result<Option<Semester>>;
    async fn list_semesters(&self, academic_year_id: Option<i64>) -> Result<Vec<Semester>>;
    async fn update_semester(
        &self,
        id: i64,
        update: UpdateSemesterRequest,
    ) -> Result<Option<Semester>>;
    async fn delete_semester(&self, id: i64) -> Result<bool>;
    async fn activate_semester(&self, id: i64) -> Result<bool>;

    /// 年级管理方法
    async fn create_grade_level(&self, req: CreateGradeLevelRequest) -> Result<GradeLevel>;
    async fn get_grade_level_by_id(&self, id: i64) -> Result<Option<GradeLevel>>;
    async fn list_grade_levels(&self) -> Result<Vec<GradeLevel>>;
    async fn delete_grade_level(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn create_class_room(&self, req: CreateClassRoomRequest) -> Result<ClassRoom>;
    async fn get_class_room_by_id(&self, id: i64) -> Result<Option<ClassRoom>>;
    async fn list_class_rooms(&self, query: ClassRoomListQuery) -> Result<Vec<ClassRoom>>;
    async fn update_class_room(
        &self,
        id: i64,
        update: UpdateClassRoomRequest,
    ) -> Result<Option<ClassRoom>>;
    async fn delete_class_room(&self, id: i64) -> Result<bool>;

    /// 学生档案管理方法
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过账号 ID 获取学生档案
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    // 列出学生，scope 为访问策略给出的可见学生 ID 集合
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
        scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<Student>>;
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 查询学生集合对应的班级 ID（去重）
    async fn list_class_room_ids_of_students(&self, student_ids: &[i64]) -> Result<Vec<i64>>;

    /// 教师档案管理方法
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_user_id(&self, user_id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 家长档案管理方法
    async fn create_parent(&self, req: CreateParentRequest) -> Result<Parent>;
    async fn get_parent_by_id(&self, id: i64) -> Result<Option<Parent>>;
    async fn get_parent_by_user_id(&self, user_id: i64) -> Result<Option<Parent>>;
    async fn list_parents(&self) -> Result<Vec<Parent>>;
    async fn update_parent(&self, id: i64, update: UpdateParentRequest) -> Result<Option<Parent>>;
    async fn delete_parent(&self, id: i64) -> Result<bool>;
    // 家长-学生关联
    async fn link_parent_student(
        &self,
        parent_id: i64,
        student_id: i64,
    ) -> Result<ParentStudentLink>;
    async fn unlink_parent_student(&self, parent_id: i64, student_id: i64) -> Result<bool>;
    async fn list_children_of_parent(&self, parent_id: i64) -> Result<Vec<Student>>;
    // 访问策略用：家长可见的学生 ID 集合
    async fn list_child_ids_of_parent(&self, parent_id: i64) -> Result<Vec<i64>>;

    /// 节次与功能教室管理方法
    async fn create_time_slot(&self, req: CreateTimeSlotRequest) -> Result<TimeSlot>;
    async fn list_time_slots(&self) -> Result<Vec<TimeSlot>>;
    async fn delete_time_slot(&self, id: i64) -> Result<bool>;
    async fn create_special_location(
        &self,
        req: CreateSpecialLocationRequest,
    ) -> Result<SpecialLocation>;
    async fn list_special_locations(&self) -> Result<Vec<SpecialLocation>>;
    async fn delete_special_location(&self, id: i64) -> Result<bool>;

    /// 课表管理方法
    async fn create_timetable_entry(
        &self,
        semester_id: i64,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry>;
    async fn get_timetable_entry_by_id(&self, id: i64) -> Result<Option<TimetableEntry>>;
    async fn list_timetable_entries(
        &self,
        semester_id: i64,
        query: TimetableListQuery,
    ) -> Result<Vec<TimetableEntry>>;
    async fn update_timetable_entry(
        &self,
        id: i64,
        update: UpdateTimetableEntryRequest,
    ) -> Result<Option<TimetableEntry>>;
    async fn delete_timetable_entry(&self, id: i64) -> Result<bool>;
    // 教室占用冲突：同学期同天同节次占用同一功能教室的条目
    async fn find_room_conflicts(
        &self,
        semester_id: i64,
        room_id: i64,
        day_of_week: i16,
        time_slot_id: i64,
        exclude_class_id: Option<i64>,
    ) -> Result<Vec<TimetableEntry>>;
    // 教师占用冲突：同学期同天同节次该教师的条目
    async fn find_teacher_conflicts(
        &self,
        semester_id: i64,
        teacher_id: i64,
        day_of_week: i16,
        time_slot_id: i64,
        exclude_class_id: Option<i64>,
    ) -> Result<Vec<TimetableEntry>>;

    /// 作业管理方法
    async fn create_assignment(
        &self,
        teacher_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // class_scope 为可见班级 ID 集合
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        class_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<Assignment>>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    async fn create_attendance(
        &self,
        recorded_by: i64,
        req: CreateAttendanceRequest,
    ) -> Result<AttendanceRecord>;
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>>;
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
        student_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<AttendanceRecord>>;
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<AttendanceRecord>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    async fn create_grade(&self, graded_by: i64, req: CreateGradeRequest) -> Result<GradeRecord>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<GradeRecord>>;
    async fn list_grades_with_pagination(
        &self,
        query: GradeListQuery,
        student_scope: Option<Vec<i64>>,
    ) -> Result<PaginatedResponse<GradeRecord>>;
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest)
    -> Result<Option<GradeRecord>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 通知管理方法
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>>;
    async fn mark_notification_read(&self, id: i64) -> Result<bool>;
    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64>;
    async fn delete_notification(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
