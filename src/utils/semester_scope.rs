//! 学期作用域解析
//!
//! 课表相关查询都必须指定操作哪个学期。学期 ID 依次从
//! `active_semester_id` cookie、`active_semester_id` 查询参数、
//! `X-Active-Semester-Id` 请求头获取，第一个非空值生效；全部缺失返回 400。

use actix_web::{HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

pub const SEMESTER_SCOPE_COOKIE: &str = "active_semester_id";
pub const SEMESTER_SCOPE_HEADER: &str = "X-Active-Semester-Id";

pub const SEMESTER_SCOPE_MISSING_MESSAGE: &str = "Missing active semester scope: provide an \
     active_semester_id cookie, an active_semester_id query parameter, or an \
     X-Active-Semester-Id header";

/// 按 cookie → query → header 的顺序取第一个非空值并解析为正整数
pub fn pick_semester_scope(
    cookie: Option<&str>,
    query: Option<&str>,
    header: Option<&str>,
) -> Option<i64> {
    [cookie, query, header]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

/// 从请求中解析学期作用域，缺失时返回 400 响应
pub fn resolve_semester_scope(
    req: &HttpRequest,
    query_value: Option<&str>,
) -> Result<i64, HttpResponse> {
    let cookie = req.cookie(SEMESTER_SCOPE_COOKIE);
    let header = req
        .headers()
        .get(SEMESTER_SCOPE_HEADER)
        .and_then(|h| h.to_str().ok());

    pick_semester_scope(cookie.as_ref().map(|c| c.value()), query_value, header).ok_or_else(|| {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SemesterScopeMissing,
            SEMESTER_SCOPE_MISSING_MESSAGE,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_missing() {
        assert_eq!(pick_semester_scope(None, None, None), None);
        assert_eq!(pick_semester_scope(Some(""), Some("  "), None), None);
    }

    #[test]
    fn test_cookie_wins() {
        assert_eq!(
            pick_semester_scope(Some("3"), Some("5"), Some("7")),
            Some(3)
        );
    }

    #[test]
    fn test_query_beats_header() {
        assert_eq!(pick_semester_scope(None, Some("5"), Some("7")), Some(5));
        assert_eq!(pick_semester_scope(Some(""), Some("5"), Some("7")), Some(5));
    }

    #[test]
    fn test_header_fallback() {
        assert_eq!(pick_semester_scope(None, None, Some("7")), Some(7));
    }

    #[test]
    fn test_non_numeric_rejected() {
        // 第一个非空值就是作用域来源，不再向后回退
        assert_eq!(pick_semester_scope(Some("abc"), Some("5"), None), None);
        assert_eq!(pick_semester_scope(Some("-2"), None, None), None);
    }
}
