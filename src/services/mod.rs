pub mod access;
pub mod academic;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod grades;
pub mod notifications;
pub mod parents;
pub mod students;
pub mod teachers;
pub mod timetable;
pub mod users;

pub use academic::AcademicService;
pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use grades::GradeService;
pub use notifications::NotificationService;
pub use parents::ParentService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use timetable::TimetableService;
pub use users::UserService;
