use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::models::grades::requests::UpdateGradeRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
    data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 改分时同样检查范围
    if let Some(score) = data.score {
        let grade = match storage.get_grade_by_id(grade_id).await {
            Ok(Some(grade)) => grade,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::NotFound,
                    "Grade record not found",
                )));
            }
            Err(e) => {
                error!("Failed to get grade {}: {}", grade_id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Grade update failed",
                    )),
                );
            }
        };

        match storage.get_assignment_by_id(grade.assignment_id).await {
            Ok(Some(assignment)) => {
                if score < 0.0 || score > assignment.max_score {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::ScoreOutOfRange,
                        format!("Score must be between 0 and {}", assignment.max_score),
                    )));
                }
            }
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
                        "Grade update failed",
                    )),
                );
            }
        }
    }

    match storage.update_grade(grade_id, data).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade updated"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Grade record not found",
        ))),
        Err(e) => {
            error!("Grade update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Grade update failed",
                )),
            )
        }
    }
}
