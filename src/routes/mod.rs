pub mod academic;

pub mod assignments;

pub mod attendance;

pub mod auth;

pub mod frontend;

pub mod grades;

pub mod notifications;

pub mod parents;

pub mod students;

pub mod teachers;

pub mod timetable;

pub mod users;

pub use academic::configure_academic_routes;
pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use frontend::configure_frontend_routes;
pub use grades::configure_grade_routes;
pub use notifications::configure_notification_routes;
pub use parents::configure_parent_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;
pub use timetable::configure_timetable_routes;
pub use users::configure_user_routes;
