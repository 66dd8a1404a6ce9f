use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::timetable::requests::{
    CreateSpecialLocationRequest, CreateTimeSlotRequest, CreateTimetableEntryRequest,
    RoomConflictQuery, TeacherConflictQuery, TimetableListQuery, UpdateTimetableEntryRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TimetableService;
use crate::utils::{SafeIdI64, SafeTimetableEntryIdI64};

// 懒加载的全局 TIMETABLE_SERVICE 实例
static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

// 节次
pub async fn list_slots(req: HttpRequest) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_slots(&req).await
}

pub async fn create_slot(
    req: HttpRequest,
    data: web::Json<CreateTimeSlotRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.create_slot(&req, data.into_inner()).await
}

pub async fn delete_slot(req: HttpRequest, slot_id: SafeIdI64) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.delete_slot(&req, slot_id.0).await
}

// 功能教室
pub async fn list_locations(req: HttpRequest) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_locations(&req).await
}

pub async fn create_location(
    req: HttpRequest,
    data: web::Json<CreateSpecialLocationRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .create_location(&req, data.into_inner())
        .await
}

pub async fn delete_location(
    req: HttpRequest,
    location_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.delete_location(&req, location_id.0).await
}

// 课表条目
pub async fn list_entries(
    req: HttpRequest,
    query: web::Query<TimetableListQuery>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_entries(&req, query.into_inner()).await
}

pub async fn create_entry(
    req: HttpRequest,
    query: web::Query<TimetableListQuery>,
    data: web::Json<CreateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .create_entry(&req, query.into_inner(), data.into_inner())
        .await
}

pub async fn update_entry(
    req: HttpRequest,
    entry_id: SafeTimetableEntryIdI64,
    data: web::Json<UpdateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .update_entry(&req, entry_id.0, data.into_inner())
        .await
}

pub async fn delete_entry(
    req: HttpRequest,
    entry_id: SafeTimetableEntryIdI64,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.delete_entry(&req, entry_id.0).await
}

// 冲突检测
pub async fn room_conflicts(
    req: HttpRequest,
    query: web::Query<RoomConflictQuery>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .check_room_conflicts(&req, query.into_inner())
        .await
}

pub async fn teacher_conflicts(
    req: HttpRequest,
    query: web::Query<TeacherConflictQuery>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .check_teacher_conflicts(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_timetable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/timetable")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/slots")
                    .service(
                        web::resource("").route(web::get().to(list_slots)).route(
                            web::post()
                                .to(create_slot)
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                        ),
                    )
                    .service(
                        web::resource("/{id}").route(
                            web::delete()
                                .to(delete_slot)
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                        ),
                    ),
            )
            .service(
                web::scope("/locations")
                    .service(
                        web::resource("").route(web::get().to(list_locations)).route(
                            web::post()
                                .to(create_location)
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                        ),
                    )
                    .service(
                        web::resource("/{id}").route(
                            web::delete()
                                .to(delete_location)
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                        ),
                    ),
            )
            .service(
                web::scope("/entries")
                    .service(
                        web::resource("").route(web::get().to(list_entries)).route(
                            web::post()
                                .to(create_entry)
                                // 排课属于教职工操作
                                .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                        ),
                    )
                    .service(
                        web::resource("/{entry_id}")
                            .route(
                                web::put()
                                    .to(update_entry)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                            )
                            .route(
                                web::delete()
                                    .to(delete_entry)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                            ),
                    ),
            )
            .service(
                web::scope("/conflicts")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/room", web::get().to(room_conflicts))
                    .route("/teacher", web::get().to(teacher_conflicts)),
            ),
    );
}
