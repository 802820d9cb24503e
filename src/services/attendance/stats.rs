use serde::{Deserialize, Serialize};

use crate::models::attendance::responses::{AttendanceRecord, AttendanceStatus};

/// 考勤页顶部的汇总计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: i64,
    pub hadir: i64,
    pub absen: i64,
}

/// 汇总在全量（未过滤）记录集上进行，搜索不影响这些数字
pub fn summarize_attendance(records: &[AttendanceRecord]) -> AttendanceSummary {
    let hadir = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Hadir)
        .count() as i64;
    let absen = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Alpha)
        .count() as i64;

    AttendanceSummary {
        total: records.len() as i64,
        hadir,
        absen,
    }
}
