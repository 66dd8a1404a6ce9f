use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::grades::requests::GradeListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::access::resolve_student_scope;

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    query: GradeListQuery,
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
        .list_grades_with_pagination(query, scope.filter_ids())
        .await
    {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取成绩列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取成绩列表失败: {e}"),
            )),
        ),
    }
}
