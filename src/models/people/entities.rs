use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生档案，账号信息在 users 表中
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub student_number: String,
    pub class_room_id: Option<i64>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师档案
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub subject: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 家长档案
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct Parent {
    pub id: i64,
    pub user_id: i64,
    pub phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 家长-学生关联
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct ParentStudentLink {
    pub id: i64,
    pub parent_id: i64,
    pub student_id: i64,
    pub linked_at: chrono::DateTime<chrono::Utc>,
}
