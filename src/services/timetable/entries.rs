use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TimetableService;
use crate::models::timetable::entities::is_valid_day_of_week;
use crate::models::timetable::requests::{
    CreateTimetableEntryRequest, TimetableListQuery, UpdateTimetableEntryRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::resolve_semester_scope;

pub async fn list_entries(
    service: &TimetableService,
    req: &HttpRequest,
    query: TimetableListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 所有课表读取都要求学期作用域
    let semester_id = match resolve_semester_scope(req, query.active_semester_id.as_deref()) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    match storage.list_timetable_entries(semester_id, query).await {
        Ok(entries) => Ok(HttpResponse::Ok().json(ApiResponse::success(entries, "获取课表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课表失败: {e}"),
            )),
        ),
    }
}

pub async fn create_entry(
    service: &TimetableService,
    req: &HttpRequest,
    query: TimetableListQuery,
    data: CreateTimetableEntryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    let semester_id = match resolve_semester_scope(req, query.active_semester_id.as_deref()) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if !is_valid_day_of_week(data.day_of_week) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "day_of_week must be between 1 and 7",
        )));
    }

    // 学期必须存在
    match storage.get_semester_by_id(semester_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SemesterNotFound,
                "Semester not found",
            )));
        }
        Err(e) => {
            error!("Failed to check semester: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Timetable entry creation failed",
                )),
            );
        }
    }

    match storage.create_timetable_entry(semester_id, data).await {
        Ok(entry) => {
            info!(
                "Timetable entry {} created for semester {}",
                entry.id, semester_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(entry, "Timetable entry created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Timetable entry creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::TimetableSlotTaken,
                    "The class already has an entry in this slot",
                )))
            } else if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Referenced class, teacher, slot or location does not exist",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Timetable entry creation failed",
                    )),
                )
            }
        }
    }
}

pub async fn update_entry(
    service: &TimetableService,
    req: &HttpRequest,
    entry_id: i64,
    data: UpdateTimetableEntryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    if let Some(day) = data.day_of_week
        && !is_valid_day_of_week(day)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "day_of_week must be between 1 and 7",
        )));
    }

    match storage.update_timetable_entry(entry_id, data).await {
        Ok(Some(entry)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(entry, "Timetable entry updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableEntryNotFound,
            "Timetable entry not found",
        ))),
        Err(e) => {
            let msg = e.to_string();
            error!("Timetable entry update failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::TimetableSlotTaken,
                    "The class already has an entry in this slot",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Timetable entry update failed",
                    )),
                )
            }
        }
    }
}

pub async fn delete_entry(
    service: &TimetableService,
    req: &HttpRequest,
    entry_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_timetable_entry(entry_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Timetable entry deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableEntryNotFound,
            "Timetable entry not found",
        ))),
        Err(e) => {
            error!("Timetable entry deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Timetable entry deletion failed",
                )),
            )
        }
    }
}
