use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

use super::TimetableService;
use crate::models::timetable::requests::CreateTimeSlotRequest;
use crate::models::{ApiResponse, ErrorCode};

static HHMM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("Invalid HH:MM regex"));

pub async fn list_slots(
    service: &TimetableService,
    req: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_time_slots().await {
        Ok(slots) => Ok(HttpResponse::Ok().json(ApiResponse::success(slots, "获取节次列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取节次列表失败: {e}"),
            )),
        ),
    }
}

pub async fn create_slot(
    service: &TimetableService,
    req: &HttpRequest,
    data: CreateTimeSlotRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 时间字段必须是 HH:MM
    if !HHMM_RE.is_match(&data.starts_at) || !HHMM_RE.is_match(&data.ends_at) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Time slot times must be in HH:MM format",
        )));
    }

    if data.starts_at >= data.ends_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Time slot must start before it ends",
        )));
    }

    match storage.create_time_slot(data).await {
        Ok(slot) => Ok(HttpResponse::Created().json(ApiResponse::success(slot, "Time slot created"))),
        Err(e) => {
            error!("Time slot creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Time slot creation failed",
                )),
            )
        }
    }
}

pub async fn delete_slot(
    service: &TimetableService,
    req: &HttpRequest,
    slot_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_time_slot(slot_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Time slot deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Time slot not found",
        ))),
        Err(e) => {
            error!("Time slot deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Time slot deletion failed",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hhmm_pattern() {
        assert!(HHMM_RE.is_match("08:00"));
        assert!(HHMM_RE.is_match("23:59"));
        assert!(!HHMM_RE.is_match("24:00"));
        assert!(!HHMM_RE.is_match("8:00"));
        assert!(!HHMM_RE.is_match("08:60"));
    }
}
