use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ParentService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 子女列表：管理员可查任意家长，家长只能查自己
pub async fn list_children(
    service: &ParentService,
    request: &HttpRequest,
    parent_id: i64,
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

    if user.role != UserRole::Admin {
        // 非管理员必须是该家长本人
        let own_record = match storage.get_parent_by_user_id(user.id).await {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to resolve parent record: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to resolve parent record",
                    )),
                );
            }
        };

        if own_record.map(|p| p.id) != Some(parent_id) {
            info!("User {} denied access to parent {}", user.id, parent_id);
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Access denied.",
            )));
        }
    }

    match storage.list_children_of_parent(parent_id).await {
        Ok(children) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(children, "获取子女列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取子女列表失败: {e}"),
            )),
        ),
    }
}

/// 管理员关联家长与学生
pub async fn link_child(
    service: &ParentService,
    request: &HttpRequest,
    parent_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 两侧档案都必须存在
    match storage.get_parent_by_id(parent_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ParentNotFound,
                "Parent not found",
            )));
        }
        Err(e) => {
            error!("Failed to check parent: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Link failed",
                )),
            );
        }
    }

    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
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
                    "Link failed",
                )),
            );
        }
    }

    match storage.link_parent_student(parent_id, student_id).await {
        Ok(link) => {
            info!("Parent {} linked to student {}", parent_id, student_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(link, "Child linked")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Link failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ParentLinkAlreadyExists,
                    "Child is already linked to this parent",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Link failed",
                    )),
                )
            }
        }
    }
}

/// 管理员解除家长与学生的关联
pub async fn unlink_child(
    service: &ParentService,
    request: &HttpRequest,
    parent_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.unlink_parent_student(parent_id, student_id).await {
        Ok(true) => {
            info!("Parent {} unlinked from student {}", parent_id, student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Child unlinked")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Link not found",
        ))),
        Err(e) => {
            error!("Unlink failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Unlink failed",
                )),
            )
        }
    }
}
