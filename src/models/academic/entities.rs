use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学年
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct AcademicYear {
    pub id: i64,
    // 学年名称，如 "2026-2027"
    pub name: String,
    pub starts_on: chrono::NaiveDate,
    pub ends_on: chrono::NaiveDate,
    // 同一时间只有一个学年处于激活状态
    pub is_active: bool,
}

// 学期
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct Semester {
    pub id: i64,
    pub academic_year_id: i64,
    pub name: String,
    pub starts_on: chrono::NaiveDate,
    pub ends_on: chrono::NaiveDate,
    pub is_active: bool,
}

// 年级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct GradeLevel {
    pub id: i64,
    // 年级序号，全局唯一
    pub level: i32,
    pub name: String,
}

// 班级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic.ts")]
pub struct ClassRoom {
    pub id: i64,
    pub name: String,
    pub grade_level_id: i64,
    // 班主任（教师记录 ID）
    pub homeroom_teacher_id: Option<i64>,
    pub capacity: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
