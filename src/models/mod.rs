pub mod academic;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod grades;
pub mod notifications;
pub mod people;
pub mod timetable;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码，随 ApiResponse 返回给前端
///
/// 0 表示成功；1xxx 通用错误；2xxx 认证授权；3xxx 资源不存在；4xxx 冲突。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    RateLimitExceeded = 1002,
    SemesterScopeMissing = 1003,
    ScoreOutOfRange = 1004,
    InternalServerError = 1999,

    Unauthorized = 2000,
    AuthFailed = 2001,
    PermissionDenied = 2002,

    NotFound = 3000,
    UserNotFound = 3001,
    StudentNotFound = 3002,
    ParentNotFound = 3003,
    TeacherNotFound = 3004,
    ClassRoomNotFound = 3005,
    GradeLevelNotFound = 3006,
    AcademicYearNotFound = 3007,
    SemesterNotFound = 3008,
    TimetableEntryNotFound = 3009,
    AssignmentNotFound = 3010,
    NotificationNotFound = 3011,

    AlreadyExists = 4000,
    UserAlreadyExists = 4001,
    GradeLevelAlreadyExists = 4002,
    AttendanceAlreadyRecorded = 4003,
    GradeAlreadyRecorded = 4004,
    ParentLinkAlreadyExists = 4005,
    TimetableSlotTaken = 4006,
}

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
