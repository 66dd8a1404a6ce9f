use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 节次，starts_at/ends_at 为 "HH:MM" 字符串
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimeSlot {
    pub id: i64,
    pub label: String,
    pub starts_at: String,
    pub ends_at: String,
    pub sort_order: i32,
}

// 功能教室（实验室、体育馆等）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct SpecialLocation {
    pub id: i64,
    pub name: String,
    pub capacity: Option<i32>,
}

// 课表条目
//
// day_of_week 取值 1-7（周一为 1）。special_location_id 为空表示在本班教室上课。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableEntry {
    pub id: i64,
    pub semester_id: i64,
    pub class_room_id: i64,
    pub teacher_id: i64,
    pub time_slot_id: i64,
    pub day_of_week: i16,
    pub subject: String,
    pub special_location_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// day_of_week 合法性检查
pub fn is_valid_day_of_week(day: i16) -> bool {
    (1..=7).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_bounds() {
        assert!(is_valid_day_of_week(1));
        assert!(is_valid_day_of_week(7));
        assert!(!is_valid_day_of_week(0));
        assert!(!is_valid_day_of_week(8));
        assert!(!is_valid_day_of_week(-1));
    }
}
