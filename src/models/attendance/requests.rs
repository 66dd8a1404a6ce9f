use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceStatus;

// 登记考勤请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CreateAttendanceRequest {
    pub student_id: i64,
    pub class_room_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

// 修改考勤请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub status: Option<AttendanceStatus>,
    pub note: Option<String>,
}

// 考勤列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub class_room_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
}
