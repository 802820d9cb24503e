use crate::models::assignments::responses::AssignmentRecord;

/// 按课程标签分组
///
/// 键序 = 标签在记录里首次出现的顺序；组内保持输入顺序，不做排序。
/// 课程缺失的记录在归一化阶段已经拿到占位标签，这里不再特判。
pub fn group_by_subject(records: &[AssignmentRecord]) -> Vec<(String, Vec<AssignmentRecord>)> {
    let mut groups: Vec<(String, Vec<AssignmentRecord>)> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|(label, _)| *label == record.subject_label)
        {
            Some((_, bucket)) => bucket.push(record.clone()),
            None => groups.push((record.subject_label.clone(), vec![record.clone()])),
        }
    }

    groups
}
