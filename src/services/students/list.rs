use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::people::requests::StudentListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::resolve_student_scope;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 列表按可见范围收窄：学生只看到自己，家长只看到子女
    let scope = match resolve_student_scope(&user, &storage).await {
        Ok(scope) => scope,
        Err(e) => {
            error!("Failed to resolve student scope: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to resolve access scope",
                )),
            );
        }
    };

    match storage
        .list_students_with_pagination(query, scope.filter_ids())
        .await
    {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取学生列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取学生列表失败: {e}"),
            )),
        ),
    }
}
