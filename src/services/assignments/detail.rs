use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::{resolve_class_scope, resolve_student_scope};

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to get assignment {}: {}", assignment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching assignment",
                )),
            );
        }
    };

    // 学生/家长只能看到可见班级的作业
    let scope = match resolve_student_scope(&user, &storage).await {
        Ok(scope) => scope,
        Err(e) => {
            error!("Failed to resolve student scope: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to resolve access scope",
                )),
            );
        }
    };

    match resolve_class_scope(&scope, &storage).await {
        Ok(None) => {}
        Ok(Some(class_ids)) => {
            if !class_ids.contains(&assignment.class_room_id) {
                info!(
                    "User {} denied access to assignment {}",
                    user.id, assignment_id
                );
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentNotFound,
                    "Assignment not found",
                )));
            }
        }
        Err(e) => {
            error!("Failed to resolve class scope: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to resolve access scope",
                )),
            );
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "OK")))
}
