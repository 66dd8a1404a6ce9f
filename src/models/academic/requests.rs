use serde::Deserialize;
use ts_rs::TS;

// 创建学年请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct CreateAcademicYearRequest {
    pub name: String,
    pub starts_on: chrono::NaiveDate,
    pub ends_on: chrono::NaiveDate,
    #[serde(default)]
    pub is_active: bool,
}

// 更新学年请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct UpdateAcademicYearRequest {
    pub name: Option<String>,
    pub starts_on: Option<chrono::NaiveDate>,
    pub ends_on: Option<chrono::NaiveDate>,
    // true 时独占激活：其余学年全部置为非激活
    pub is_active: Option<bool>,
}

// 创建学期请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct CreateSemesterRequest {
    pub academic_year_id: i64,
    pub name: String,
    pub starts_on: chrono::NaiveDate,
    pub ends_on: chrono::NaiveDate,
    #[serde(default)]
    pub is_active: bool,
}

// 更新学期请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct UpdateSemesterRequest {
    pub name: Option<String>,
    pub starts_on: Option<chrono::NaiveDate>,
    pub ends_on: Option<chrono::NaiveDate>,
    pub is_active: Option<bool>,
}

// 创建年级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct CreateGradeLevelRequest {
    pub level: i32,
    pub name: String,
}

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct CreateClassRoomRequest {
    pub name: String,
    pub grade_level_id: i64,
    pub homeroom_teacher_id: Option<i64>,
    pub capacity: Option<i32>,
}

// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct UpdateClassRoomRequest {
    pub name: Option<String>,
    pub grade_level_id: Option<i64>,
    pub homeroom_teacher_id: Option<i64>,
    pub capacity: Option<i32>,
}

// 学期列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct SemesterListQuery {
    pub academic_year_id: Option<i64>,
}

// 班级列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct ClassRoomListQuery {
    pub grade_level: Option<i32>,
    pub search: Option<String>,
}
