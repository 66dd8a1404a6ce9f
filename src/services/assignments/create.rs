use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    data: CreateAssignmentRequest,
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

    if let Some(score) = data.max_score
        && score <= 0.0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "max_score must be positive",
        )));
    }

    // 权限校验：教师只能以自己的名义布置，管理员必须指定教师
    let teacher_id = match resolve_assigning_teacher(&user.role, user.id, &data, &storage).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    // 班级必须存在
    match storage.get_class_room_by_id(data.class_room_id).await {
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
                    "Assignment creation failed",
                )),
            );
        }
    }

    match storage.create_assignment(teacher_id, data).await {
        Ok(assignment) => {
            info!(
                "Assignment {} created by teacher {}",
                assignment.title, teacher_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "Assignment created")))
        }
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Assignment creation failed",
                )),
            )
        }
    }
}

/// 权限校验辅助函数：返回作业归属的教师档案 ID
async fn resolve_assigning_teacher(
    role: &UserRole,
    user_id: i64,
    data: &CreateAssignmentRequest,
    storage: &Arc<dyn Storage>,
) -> Result<i64, HttpResponse> {
    match role {
        UserRole::Admin => match data.teacher_id {
            Some(teacher_id) => match storage.get_teacher_by_id(teacher_id).await {
                Ok(Some(teacher)) => Ok(teacher.id),
                Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Teacher not found",
                ))),
                Err(e) => {
                    error!("Failed to get teacher by id: {}", e);
                    Err(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Internal server error while fetching teacher",
                        )),
                    )
                }
            },
            None => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Admin must specify the assigning teacher",
            ))),
        },
        UserRole::Teacher => {
            let own = match storage.get_teacher_by_user_id(user_id).await {
                Ok(t) => t,
                Err(e) => {
                    error!("Failed to resolve teacher record: {}", e);
                    return Err(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Failed to resolve teacher record",
                        ),
                    ));
                }
            };

            let own = match own {
                Some(t) => t,
                None => {
                    return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::PermissionDenied,
                        "No teacher record attached to this account",
                    )));
                }
            };

            // 指定了别的教师则拒绝
            if let Some(requested) = data.teacher_id
                && requested != own.id
            {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PermissionDenied,
                    "You do not have permission to assign for another teacher",
                )));
            }

            Ok(own.id)
        }
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "You do not have permission to create assignments",
        ))),
    }
}
