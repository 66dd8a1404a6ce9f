use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academic::requests::{
    ClassRoomListQuery, CreateAcademicYearRequest, CreateClassRoomRequest, CreateGradeLevelRequest,
    CreateSemesterRequest, SemesterListQuery, UpdateAcademicYearRequest, UpdateClassRoomRequest,
    UpdateSemesterRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AcademicService;
use crate::utils::{SafeClassRoomIdI64, SafeIdI64};

// 懒加载的全局 ACADEMIC_SERVICE 实例
static ACADEMIC_SERVICE: Lazy<AcademicService> = Lazy::new(AcademicService::new_lazy);

// 学年
pub async fn list_years(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_years(&req).await
}

pub async fn get_active_year(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.get_active_year(&req).await
}

pub async fn create_year(
    req: HttpRequest,
    data: web::Json<CreateAcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.create_year(&req, data.into_inner()).await
}

pub async fn update_year(
    req: HttpRequest,
    year_id: SafeIdI64,
    data: web::Json<UpdateAcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .update_year(&req, year_id.0, data.into_inner())
        .await
}

pub async fn delete_year(req: HttpRequest, year_id: SafeIdI64) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.delete_year(&req, year_id.0).await
}

// 学期
pub async fn list_semesters(
    req: HttpRequest,
    query: web::Query<SemesterListQuery>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .list_semesters(&req, query.into_inner().academic_year_id)
        .await
}

pub async fn get_active_semester(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.get_active_semester(&req).await
}

pub async fn create_semester(
    req: HttpRequest,
    data: web::Json<CreateSemesterRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .create_semester(&req, data.into_inner())
        .await
}

pub async fn update_semester(
    req: HttpRequest,
    semester_id: SafeIdI64,
    data: web::Json<UpdateSemesterRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .update_semester(&req, semester_id.0, data.into_inner())
        .await
}

pub async fn delete_semester(
    req: HttpRequest,
    semester_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.delete_semester(&req, semester_id.0).await
}

// 年级
pub async fn list_grade_levels(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_grade_levels(&req).await
}

pub async fn create_grade_level(
    req: HttpRequest,
    data: web::Json<CreateGradeLevelRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .create_grade_level(&req, data.into_inner())
        .await
}

pub async fn delete_grade_level(
    req: HttpRequest,
    grade_level_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .delete_grade_level(&req, grade_level_id.0)
        .await
}

// 班级
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassRoomListQuery>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn get_class(
    req: HttpRequest,
    class_id: SafeClassRoomIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.get_class(&req, class_id.0).await
}

pub async fn create_class(
    req: HttpRequest,
    data: web::Json<CreateClassRoomRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.create_class(&req, data.into_inner()).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassRoomIdI64,
    data: web::Json<UpdateClassRoomRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .update_class(&req, class_id.0, data.into_inner())
        .await
}

pub async fn delete_class(
    req: HttpRequest,
    class_id: SafeClassRoomIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.delete_class(&req, class_id.0).await
}

// 配置路由
pub fn configure_academic_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/academic")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/academic-years")
                    .service(
                        web::resource("").route(web::get().to(list_years)).route(
                            web::post()
                                .to(create_year)
                                // 仅管理员可以创建学年
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                        ),
                    )
                    .service(web::resource("/active").route(web::get().to(get_active_year)))
                    .service(
                        web::resource("/{id}")
                            .route(
                                web::put()
                                    .to(update_year)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            )
                            .route(
                                web::delete()
                                    .to(delete_year)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            ),
                    ),
            )
            .service(
                web::scope("/semesters")
                    .service(
                        web::resource("")
                            .route(web::get().to(list_semesters))
                            .route(
                                web::post()
                                    .to(create_semester)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            ),
                    )
                    .service(web::resource("/active").route(web::get().to(get_active_semester)))
                    .service(
                        web::resource("/{id}")
                            .route(
                                web::put()
                                    .to(update_semester)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            )
                            .route(
                                web::delete()
                                    .to(delete_semester)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                            ),
                    ),
            )
            .service(
                web::scope("/grade-levels").service(
                    web::resource("")
                        .route(web::get().to(list_grade_levels))
                        .route(
                            web::post()
                                .to(create_grade_level)
                                // 仅管理员可以创建年级
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                        ),
                )
                .service(
                    web::resource("/{id}").route(
                        web::delete()
                            .to(delete_grade_level)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
                ),
            )
            .service(
                web::scope("/classes")
                    .service(
                        web::resource("").route(web::get().to(list_classes)).route(
                            web::post()
                                .to(create_class)
                                // 教职工维护班级
                                .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                        ),
                    )
                    .service(
                        web::resource("/{class_room_id}")
                            .route(web::get().to(get_class))
                            .route(
                                web::put()
                                    .to(update_class)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                            )
                            .route(
                                web::delete()
                                    .to(delete_class)
                                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                            ),
                    ),
            ),
    );
}
