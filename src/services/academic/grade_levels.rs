use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AcademicService;
use crate::models::academic::requests::CreateGradeLevelRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_grade_levels(
    service: &AcademicService,
    req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_grade_levels().await {
        Ok(levels) => Ok(HttpResponse::Ok().json(ApiResponse::success(levels, "获取年级列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取年级列表失败: {e}"),
            )),
        ),
    }
}

/// 创建年级，level 重复返回 409 且不会产生重复行
pub async fn create_grade_level(
    service: &AcademicService,
    req: &HttpRequest,
    data: CreateGradeLevelRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if data.level <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Grade level must be a positive number",
        )));
    }

    if data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Grade level name must not be empty",
        )));
    }

    match storage.create_grade_level(data).await {
        Ok(level) => {
            info!("Grade level {} created", level.level);
            Ok(HttpResponse::Created().json(ApiResponse::success(level, "Grade level created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Grade level creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::GradeLevelAlreadyExists,
                    "Grade level already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Grade level creation failed",
                    )),
                )
            }
        }
    }
}

pub async fn delete_grade_level(
    service: &AcademicService,
    req: &HttpRequest,
    grade_level_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_grade_level(grade_level_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade level deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeLevelNotFound,
            "Grade level not found",
        ))),
        Err(e) => {
            error!("Grade level deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Grade level deletion failed",
                )),
            )
        }
    }
}
