use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩记录，每个学生每份作业一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeRecord {
    pub id: i64,
    pub student_id: i64,
    pub assignment_id: i64,
    pub score: f64,
    pub comment: Option<String>,
    // 评分人（用户 ID）
    pub graded_by: i64,
    pub graded_at: chrono::DateTime<chrono::Utc>,
}
