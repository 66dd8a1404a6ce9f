use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AcademicService;
use crate::models::academic::requests::{CreateSemesterRequest, UpdateSemesterRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_semesters(
    service: &AcademicService,
    req: &HttpRequest,
    academic_year_id: Option<i64>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_semesters(academic_year_id).await {
        Ok(semesters) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(semesters, "获取学期列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取学期列表失败: {e}"),
            )),
        ),
    }
}

/// 当前激活学期，没有则 404
pub async fn get_active_semester(
    service: &AcademicService,
    req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.get_active_semester().await {
        Ok(Some(semester)) => Ok(HttpResponse::Ok().json(ApiResponse::success(semester, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SemesterNotFound,
            "No active semester",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询激活学期失败: {e}"),
            )),
        ),
    }
}

pub async fn create_semester(
    service: &AcademicService,
    req: &HttpRequest,
    data: CreateSemesterRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if data.starts_on >= data.ends_on {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Semester must start before it ends",
        )));
    }

    // 学年必须存在
    match storage.get_academic_year_by_id(data.academic_year_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AcademicYearNotFound,
                "Academic year not found",
            )));
        }
        Err(e) => {
            error!("Failed to check academic year: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Semester creation failed",
                )),
            );
        }
    }

    match storage.create_semester(data).await {
        Ok(semester) => {
            info!("Semester {} created", semester.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(semester, "Semester created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Semester creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "Semester already exists in this academic year",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Semester creation failed",
                    )),
                )
            }
        }
    }
}

pub async fn update_semester(
    service: &AcademicService,
    req: &HttpRequest,
    semester_id: i64,
    data: UpdateSemesterRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.update_semester(semester_id, data).await {
        Ok(Some(semester)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(semester, "Semester updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SemesterNotFound,
            "Semester not found",
        ))),
        Err(e) => {
            error!("Semester update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Semester update failed",
                )),
            )
        }
    }
}

pub async fn delete_semester(
    service: &AcademicService,
    req: &HttpRequest,
    semester_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_semester(semester_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Semester deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SemesterNotFound,
            "Semester not found",
        ))),
        Err(e) => {
            error!("Semester deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Semester deletion failed",
                )),
            )
        }
    }
}
