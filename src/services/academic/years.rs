use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AcademicService;
use crate::models::academic::requests::{CreateAcademicYearRequest, UpdateAcademicYearRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_years(service: &AcademicService, req: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_academic_years().await {
        Ok(years) => Ok(HttpResponse::Ok().json(ApiResponse::success(years, "获取学年列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取学年列表失败: {e}"),
            )),
        ),
    }
}

/// 当前激活学年，没有则 404
pub async fn get_active_year(
    service: &AcademicService,
    req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.get_active_academic_year().await {
        Ok(Some(year)) => Ok(HttpResponse::Ok().json(ApiResponse::success(year, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "No active academic year",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询激活学年失败: {e}"),
            )),
        ),
    }
}

pub async fn create_year(
    service: &AcademicService,
    req: &HttpRequest,
    data: CreateAcademicYearRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if data.starts_on >= data.ends_on {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Academic year must start before it ends",
        )));
    }

    match storage.create_academic_year(data).await {
        Ok(year) => {
            info!("Academic year {} created", year.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(year, "Academic year created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Academic year creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "Academic year name already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Academic year creation failed",
                    )),
                )
            }
        }
    }
}

pub async fn update_year(
    service: &AcademicService,
    req: &HttpRequest,
    year_id: i64,
    data: UpdateAcademicYearRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.update_academic_year(year_id, data).await {
        Ok(Some(year)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(year, "Academic year updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        ))),
        Err(e) => {
            error!("Academic year update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Academic year update failed",
                )),
            )
        }
    }
}

pub async fn delete_year(
    service: &AcademicService,
    req: &HttpRequest,
    year_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_academic_year(year_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Academic year deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        ))),
        Err(e) => {
            error!("Academic year deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Academic year deletion failed",
                )),
            )
        }
    }
}
