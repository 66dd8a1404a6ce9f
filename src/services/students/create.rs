use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::users::entities::UserRole;
use crate::models::people::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_student_number;

/// 教职工为学生账号建档
pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(e) = validate_student_number(&data.student_number) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, e)));
    }

    // 账号必须存在且是学生角色
    match storage.get_user_by_id(data.user_id).await {
        Ok(Some(user)) => {
            if user.role != UserRole::Student {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "Student records can only be attached to student accounts",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            error!("Failed to check user: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Student creation failed",
                )),
            );
        }
    }

    // 指定班级时校验班级存在
    if let Some(class_room_id) = data.class_room_id {
        match storage.get_class_room_by_id(class_room_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassRoomNotFound,
                    "Class room not found",
                )));
            }
            Err(e) => {
                error!("Failed to check class room: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Student creation failed",
                    )),
                );
            }
        }
    }

    match storage.create_student(data).await {
        Ok(student) => {
            info!("Student record {} created", student.student_number);
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "Student created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Student creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "Student number already exists or user already has a record",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Student creation failed",
                    )),
                )
            }
        }
    }
}
