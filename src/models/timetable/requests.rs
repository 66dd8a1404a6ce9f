use serde::Deserialize;
use ts_rs::TS;

// 创建节次请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimeSlotRequest {
    pub label: String,
    pub starts_at: String,
    pub ends_at: String,
    pub sort_order: Option<i32>,
}

// 创建功能教室请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateSpecialLocationRequest {
    pub name: String,
    pub capacity: Option<i32>,
}

// 创建课表条目请求，学期来自请求的学期作用域
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimetableEntryRequest {
    pub class_room_id: i64,
    pub teacher_id: i64,
    pub time_slot_id: i64,
    pub day_of_week: i16,
    pub subject: String,
    pub special_location_id: Option<i64>,
}

// 更新课表条目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct UpdateTimetableEntryRequest {
    pub class_room_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub time_slot_id: Option<i64>,
    pub day_of_week: Option<i16>,
    pub subject: Option<String>,
    pub special_location_id: Option<i64>,
}

// 课表查询参数，学期 ID 从作用域（cookie/query/header）解析
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableListQuery {
    pub class_room_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub day_of_week: Option<i16>,
    pub active_semester_id: Option<String>,
}

// 教室占用冲突查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct RoomConflictQuery {
    pub room_id: i64,
    pub day_of_week: i16,
    pub time_slot_id: i64,
    // 编辑已有课表时排除本班条目
    pub exclude_class_id: Option<i64>,
    pub active_semester_id: Option<String>,
}

// 教师占用冲突查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TeacherConflictQuery {
    pub teacher_id: i64,
    pub day_of_week: i16,
    pub time_slot_id: i64,
    pub exclude_class_id: Option<i64>,
    pub active_semester_id: Option<String>,
}
