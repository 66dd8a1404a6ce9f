pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod semester_scope;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAssignmentIdI64, SafeClassRoomIdI64, SafeIdI64, SafeNotificationIdI64, SafeParentIdI64,
    SafeStudentIdI64, SafeTeacherIdI64, SafeTimetableEntryIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use semester_scope::resolve_semester_scope;
pub use sql::escape_like_pattern;
