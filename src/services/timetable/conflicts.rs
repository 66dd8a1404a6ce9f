//! 课表冲突检测
//!
//! 两个检测都是精确匹配查询：同学期、同天、同节次下，教室或教师是否已被占用。
//! exclude_class_id 用于编辑场景，排除正在编辑的班级自己的条目。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TimetableService;
use crate::models::timetable::entities::is_valid_day_of_week;
use crate::models::timetable::requests::{RoomConflictQuery, TeacherConflictQuery};
use crate::models::timetable::responses::ConflictReport;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::resolve_semester_scope;

/// 教室占用冲突检测
pub async fn check_room_conflicts(
    service: &TimetableService,
    req: &HttpRequest,
    query: RoomConflictQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    let semester_id = match resolve_semester_scope(req, query.active_semester_id.as_deref()) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if !is_valid_day_of_week(query.day_of_week) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "day_of_week must be between 1 and 7",
        )));
    }

    match storage
        .find_room_conflicts(
            semester_id,
            query.room_id,
            query.day_of_week,
            query.time_slot_id,
            query.exclude_class_id,
        )
        .await
    {
        Ok(conflicts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ConflictReport::new(conflicts),
            "冲突检测完成",
        ))),
        Err(e) => {
            error!("Room conflict check failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Room conflict check failed",
                )),
            )
        }
    }
}

/// 教师占用冲突检测
pub async fn check_teacher_conflicts(
    service: &TimetableService,
    req: &HttpRequest,
    query: TeacherConflictQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    let semester_id = match resolve_semester_scope(req, query.active_semester_id.as_deref()) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    if !is_valid_day_of_week(query.day_of_week) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "day_of_week must be between 1 and 7",
        )));
    }

    match storage
        .find_teacher_conflicts(
            semester_id,
            query.teacher_id,
            query.day_of_week,
            query.time_slot_id,
            query.exclude_class_id,
        )
        .await
    {
        Ok(conflicts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ConflictReport::new(conflicts),
            "冲突检测完成",
        ))),
        Err(e) => {
            error!("Teacher conflict check failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Teacher conflict check failed",
                )),
            )
        }
    }
}
