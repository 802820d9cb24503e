use super::filter::filter_attendance;
use crate::models::attendance::responses::AttendanceRecord;
use crate::models::{PageView, paginate};

/// 过滤 + 分页一步到位，对应考勤明细表格的展示流程
pub fn page_attendance(
    records: &[AttendanceRecord],
    search_term: &str,
    page: i64,
    page_size: i64,
) -> PageView<AttendanceRecord> {
    let filtered = filter_attendance(records, search_term);
    paginate(&filtered, page, page_size)
}
