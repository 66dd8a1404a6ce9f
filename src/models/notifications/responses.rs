use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 未读通知数量响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}
