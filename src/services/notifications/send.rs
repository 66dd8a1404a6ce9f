use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NotificationService;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 教职工向指定用户发送通知
pub async fn send_notification(
    service: &NotificationService,
    request: &HttpRequest,
    data: CreateNotificationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Notification title must not be empty",
        )));
    }

    // 收件人必须存在
    match storage.get_user_by_id(data.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Recipient not found",
            )));
        }
        Err(e) => {
            error!("Failed to check recipient: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Notification sending failed",
                )),
            );
        }
    }

    match storage.create_notification(data).await {
        Ok(notification) => {
            info!("Notification {} sent to user {}", notification.id, notification.user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(notification, "Notification sent")))
        }
        Err(e) => {
            error!("Notification sending failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Notification sending failed",
                )),
            )
        }
    }
}
