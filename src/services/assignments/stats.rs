use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::SubmissionStatus;
use crate::models::assignments::responses::AssignmentRecord;

/// 任务页顶部的状态统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignmentStatistics {
    pub total: usize,
    pub belum_mengerjakan: usize,
    pub mengerjakan: usize,
    pub terlambat: usize,
    pub dinilai: usize,
}

/// 统计针对"已过滤后"的记录集，数字必须跟当前过滤条件一致
pub fn compute_statistics(records: &[AssignmentRecord]) -> AssignmentStatistics {
    let count = |status: SubmissionStatus| records.iter().filter(|r| r.status == status).count();

    AssignmentStatistics {
        total: records.len(),
        belum_mengerjakan: count(SubmissionStatus::BelumMengerjakan),
        mengerjakan: count(SubmissionStatus::Mengerjakan),
        terlambat: count(SubmissionStatus::Terlambat),
        dinilai: count(SubmissionStatus::Dinilai),
    }
}
