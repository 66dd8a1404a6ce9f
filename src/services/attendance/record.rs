use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::CreateAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 教职工登记考勤，每个学生每天一条
pub async fn record_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    data: CreateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let recorded_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 学生必须存在且属于指定班级
    match storage.get_student_by_id(data.student_id).await {
        Ok(Some(student)) => {
            if student.class_room_id != Some(data.class_room_id) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "Student does not belong to this class room",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to check student: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Attendance recording failed",
                )),
            );
        }
    }

    match storage.create_attendance(recorded_by, data).await {
        Ok(record) => {
            info!(
                "Attendance recorded for student {} on {}",
                record.student_id, record.date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(record, "Attendance recorded")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Attendance recording failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceAlreadyRecorded,
                    "Attendance already recorded for this student on this date",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Attendance recording failed",
                    )),
                )
            }
        }
    }
}
