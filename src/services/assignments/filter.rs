use crate::models::assignments::responses::AssignmentRecord;

/// 表示"不过滤"的哨兵值
pub const SEMUA: &str = "Semua";

/// 列表过滤状态，纯投影，不持久化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub status: String,
    pub subject: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status: SEMUA.to_string(),
            subject: SEMUA.to_string(),
        }
    }
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        self.status == SEMUA && self.subject == SEMUA
    }
}

/// 按状态和课程过滤任务列表
///
/// 哨兵值 "Semua" 完全跳过对应谓词；两个过滤条件同时给出时取交集（AND）。
pub fn filter_assignments(
    records: &[AssignmentRecord],
    filter: &FilterState,
) -> Vec<AssignmentRecord> {
    records
        .iter()
        .filter(|record| {
            let status_ok = filter.status == SEMUA || record.status.label() == filter.status;
            let subject_ok = filter.subject == SEMUA || record.subject_label == filter.subject;
            status_ok && subject_ok
        })
        .cloned()
        .collect()
}

/// 状态下拉框选项：第一项固定为哨兵，其余按首次出现顺序去重
pub fn status_options(records: &[AssignmentRecord]) -> Vec<String> {
    let mut options = vec![SEMUA.to_string()];
    for record in records {
        let label = record.status.label().to_string();
        if !options.contains(&label) {
            options.push(label);
        }
    }
    options
}

/// 课程下拉框选项，同样保持首次出现顺序
pub fn subject_options(records: &[AssignmentRecord]) -> Vec<String> {
    let mut options = vec![SEMUA.to_string()];
    for record in records {
        if !options.contains(&record.subject_label) {
            options.push(record.subject_label.clone());
        }
    }
    options
}
