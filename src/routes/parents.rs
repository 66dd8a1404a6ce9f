use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::people::requests::{CreateParentRequest, UpdateParentRequest};
use crate::models::users::entities::UserRole;
use crate::services::ParentService;
use crate::utils::{SafeParentIdI64, SafeStudentIdI64};

// 懒加载的全局 PARENT_SERVICE 实例
static PARENT_SERVICE: Lazy<ParentService> = Lazy::new(ParentService::new_lazy);

pub async fn list_parents(req: HttpRequest) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.list_parents(&req).await
}

pub async fn get_parent(req: HttpRequest, parent_id: SafeParentIdI64) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.get_parent(&req, parent_id.0).await
}

pub async fn create_parent(
    req: HttpRequest,
    data: web::Json<CreateParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.create_parent(&req, data.into_inner()).await
}

pub async fn update_parent(
    req: HttpRequest,
    parent_id: SafeParentIdI64,
    data: web::Json<UpdateParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .update_parent(&req, parent_id.0, data.into_inner())
        .await
}

pub async fn delete_parent(
    req: HttpRequest,
    parent_id: SafeParentIdI64,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.delete_parent(&req, parent_id.0).await
}

pub async fn list_children(
    req: HttpRequest,
    parent_id: SafeParentIdI64,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.list_children(&req, parent_id.0).await
}

pub async fn link_child(
    req: HttpRequest,
    parent_id: SafeParentIdI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .link_child(&req, parent_id.0, student_id.0)
        .await
}

pub async fn unlink_child(
    req: HttpRequest,
    parent_id: SafeParentIdI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .unlink_child(&req, parent_id.0, student_id.0)
        .await
}

// 配置路由
pub fn configure_parent_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/parents")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_parents)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_parent)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                // 子女列表：管理员或家长本人（服务层校验归属）
                web::resource("/{parent_id}/children").route(web::get().to(list_children)),
            )
            .service(
                web::resource("/{parent_id}/children/{student_id}")
                    .route(
                        web::post()
                            .to(link_child)
                            // 关联维护仅管理员可用
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(unlink_child)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{parent_id}")
                    .route(
                        web::get()
                            .to(get_parent)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_parent)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_parent)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
