//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod academic_years;
pub mod assignments;
pub mod attendance_records;
pub mod class_rooms;
pub mod grade_levels;
pub mod grade_records;
pub mod notifications;
pub mod parent_students;
pub mod parents;
pub mod semesters;
pub mod special_locations;
pub mod students;
pub mod teachers;
pub mod time_slots;
pub mod timetable_entries;
pub mod users;
