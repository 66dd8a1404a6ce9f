use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 教职工录入成绩，分数必须落在作业满分范围内
pub async fn record_grade(
    service: &GradeService,
    request: &HttpRequest,
    data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let graded_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 作业必须存在，且分数在 0..=max_score 内
    let assignment = match storage.get_assignment_by_id(data.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to check assignment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Grade recording failed",
                )),
            );
        }
    };

    if data.score < 0.0 || data.score > assignment.max_score {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ScoreOutOfRange,
            format!(
                "Score must be between 0 and {}",
                assignment.max_score
            ),
        )));
    }

    // 学生必须存在且属于作业所在的班级
    match storage.get_student_by_id(data.student_id).await {
        Ok(Some(student)) => {
            if student.class_room_id != Some(assignment.class_room_id) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "Student does not belong to the assignment's class room",
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
                    "Grade recording failed",
                )),
            );
        }
    }

    match storage.create_grade(graded_by, data).await {
        Ok(grade) => {
            info!(
                "Grade recorded for student {} on assignment {}",
                grade.student_id, grade.assignment_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(grade, "Grade recorded")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Grade recording failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::GradeAlreadyRecorded,
                    "Grade already recorded for this student on this assignment",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Grade recording failed",
                    )),
                )
            }
        }
    }
}
