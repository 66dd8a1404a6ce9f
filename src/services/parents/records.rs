use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ParentService;
use crate::models::users::entities::UserRole;
use crate::models::people::requests::{CreateParentRequest, UpdateParentRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_parents(
    service: &ParentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_parents().await {
        Ok(parents) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(parents, "获取家长列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取家长列表失败: {e}"),
            )),
        ),
    }
}

pub async fn get_parent(
    service: &ParentService,
    request: &HttpRequest,
    parent_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_parent_by_id(parent_id).await {
        Ok(Some(parent)) => Ok(HttpResponse::Ok().json(ApiResponse::success(parent, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ParentNotFound,
            "Parent not found",
        ))),
        Err(e) => {
            error!("Failed to get parent {}: {}", parent_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching parent",
                )),
            )
        }
    }
}

/// 管理员为家长账号建档
pub async fn create_parent(
    service: &ParentService,
    request: &HttpRequest,
    data: CreateParentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(data.user_id).await {
        Ok(Some(user)) => {
            if user.role != UserRole::Parent {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "Parent records can only be attached to parent accounts",
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
                    "Parent creation failed",
                )),
            );
        }
    }

    match storage.create_parent(data).await {
        Ok(parent) => {
            info!("Parent record {} created", parent.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(parent, "Parent created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Parent creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "User already has a parent record",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Parent creation failed",
                    )),
                )
            }
        }
    }
}

pub async fn update_parent(
    service: &ParentService,
    request: &HttpRequest,
    parent_id: i64,
    data: UpdateParentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_parent(parent_id, data).await {
        Ok(Some(parent)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(parent, "Parent updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ParentNotFound,
            "Parent not found",
        ))),
        Err(e) => {
            error!("Parent update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Parent update failed",
                )),
            )
        }
    }
}

pub async fn delete_parent(
    service: &ParentService,
    request: &HttpRequest,
    parent_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_parent(parent_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Parent deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ParentNotFound,
            "Parent not found",
        ))),
        Err(e) => {
            error!("Parent deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Parent deletion failed",
                )),
            )
        }
    }
}
