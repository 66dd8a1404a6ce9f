use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TimetableService;
use crate::models::timetable::requests::CreateSpecialLocationRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_locations(
    service: &TimetableService,
    req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_special_locations().await {
        Ok(locations) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(locations, "获取功能教室列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取功能教室列表失败: {e}"),
            )),
        ),
    }
}

pub async fn create_location(
    service: &TimetableService,
    req: &HttpRequest,
    data: CreateSpecialLocationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Location name must not be empty",
        )));
    }

    match storage.create_special_location(data).await {
        Ok(location) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(location, "Location created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Location creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "Location name already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Location creation failed",
                    )),
                )
            }
        }
    }
}

pub async fn delete_location(
    service: &TimetableService,
    req: &HttpRequest,
    location_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_special_location(location_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Location deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Location not found",
        ))),
        Err(e) => {
            error!("Location deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Location deletion failed",
                )),
            )
        }
    }
}
