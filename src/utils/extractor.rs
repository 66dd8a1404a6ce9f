//! 路径参数安全提取器
//!
//! 将路径中的 ID 解析为正整数，解析失败时直接返回 400 统一错误响应，
//! 处理函数里拿到的永远是合法 ID。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|s| s.parse::<i64>().ok())
                        .filter(|id| *id > 0);

                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => {
                            let message = concat!("Missing or invalid ", $param);
                            let response = HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(ErrorCode::BadRequest, message),
                            );
                            Err(InternalError::from_response(message, response).into())
                        }
                    })
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeIdI64("id"),
    SafeStudentIdI64("student_id"),
    SafeTeacherIdI64("teacher_id"),
    SafeParentIdI64("parent_id"),
    SafeClassRoomIdI64("class_room_id"),
    SafeAssignmentIdI64("assignment_id"),
    SafeTimetableEntryIdI64("entry_id"),
    SafeNotificationIdI64("notification_id"),
}
