use crate::models::attendance::responses::AttendanceRecord;

/// 按搜索词过滤考勤记录
///
/// 课堂材料做大小写不敏感的子串匹配，课次按数字转字符串后做包含匹配；
/// 空搜索词原样返回全部记录，保持原有顺序。
pub fn filter_attendance(records: &[AttendanceRecord], search_term: &str) -> Vec<AttendanceRecord> {
    if search_term.is_empty() {
        return records.to_vec();
    }

    let term = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.material.to_lowercase().contains(&term)
                || record.meeting_number.to_string().contains(&term)
        })
        .cloned()
        .collect()
}
