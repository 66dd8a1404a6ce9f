use serde::Deserialize;
use ts_rs::TS;

// 创建学生档案请求，user_id 必须指向 student 角色的账号
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub student_number: String,
    pub class_room_id: Option<i64>,
    pub date_of_birth: Option<chrono::NaiveDate>,
}

// 更新学生档案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct UpdateStudentRequest {
    pub student_number: Option<String>,
    pub class_room_id: Option<i64>,
    pub date_of_birth: Option<chrono::NaiveDate>,
}

// 学生列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_room_id: Option<i64>,
    pub search: Option<String>,
}

// 创建教师档案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct CreateTeacherRequest {
    pub user_id: i64,
    pub subject: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
}

// 更新教师档案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct UpdateTeacherRequest {
    pub subject: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
}

// 创建家长档案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct CreateParentRequest {
    pub user_id: i64,
    pub phone: Option<String>,
}

// 更新家长档案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/people.ts")]
pub struct UpdateParentRequest {
    pub phone: Option<String>,
}
