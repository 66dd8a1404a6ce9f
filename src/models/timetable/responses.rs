use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::TimetableEntry;

// 冲突检测响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct ConflictReport {
    pub conflicts: Vec<TimetableEntry>,
    pub has_conflicts: bool,
}

impl ConflictReport {
    pub fn new(conflicts: Vec<TimetableEntry>) -> Self {
        let has_conflicts = !conflicts.is_empty();
        Self {
            conflicts,
            has_conflicts,
        }
    }
}
