use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AcademicService;
use crate::models::academic::requests::{
    ClassRoomListQuery, CreateClassRoomRequest, UpdateClassRoomRequest,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_classes(
    service: &AcademicService,
    req: &HttpRequest,
    query: ClassRoomListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.list_class_rooms(query).await {
        Ok(rooms) => Ok(HttpResponse::Ok().json(ApiResponse::success(rooms, "获取班级列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取班级列表失败: {e}"),
            )),
        ),
    }
}

pub async fn get_class(
    service: &AcademicService,
    req: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.get_class_room_by_id(class_id).await {
        Ok(Some(room)) => Ok(HttpResponse::Ok().json(ApiResponse::success(room, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassRoomNotFound,
            "Class room not found",
        ))),
        Err(e) => {
            error!("Failed to get class room {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching class room",
                )),
            )
        }
    }
}

pub async fn create_class(
    service: &AcademicService,
    req: &HttpRequest,
    data: CreateClassRoomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    // 年级必须存在
    match storage.get_grade_level_by_id(data.grade_level_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GradeLevelNotFound,
                "Grade level not found",
            )));
        }
        Err(e) => {
            error!("Failed to check grade level: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Class room creation failed",
                )),
            );
        }
    }

    // 指定班主任时校验教师档案存在
    if let Some(teacher_id) = data.homeroom_teacher_id {
        match storage.get_teacher_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Homeroom teacher not found",
                )));
            }
            Err(e) => {
                error!("Failed to check teacher: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Class room creation failed",
                    )),
                );
            }
        }
    }

    match storage.create_class_room(data).await {
        Ok(room) => {
            info!("Class room {} created", room.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(room, "Class room created")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Class room creation failed: {}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyExists,
                    "Class room name already exists",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Class room creation failed",
                    )),
                )
            }
        }
    }
}

pub async fn update_class(
    service: &AcademicService,
    req: &HttpRequest,
    class_id: i64,
    data: UpdateClassRoomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.update_class_room(class_id, data).await {
        Ok(Some(room)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(room, "Class room updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassRoomNotFound,
            "Class room not found",
        ))),
        Err(e) => {
            error!("Class room update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Class room update failed",
                )),
            )
        }
    }
}

pub async fn delete_class(
    service: &AcademicService,
    req: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(req);

    match storage.delete_class_room(class_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Class room deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassRoomNotFound,
            "Class room not found",
        ))),
        Err(e) => {
            error!("Class room deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Class room deletion failed",
                )),
            )
        }
    }
}
