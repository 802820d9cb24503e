use serde::{Deserialize, Serialize};

use super::entities::{RawAssignment, RawSubmissionDetail, SubmissionStatus, TaskType};

/// 课程信息缺失时的分组占位标签
pub const UNKNOWN_SUBJECT_LABEL: &str = "Mata Pelajaran Tidak Diketahui";

/// 任务卡片视图模型
///
/// 原始条目里的可选嵌套对象在这里一次性展开成平铺字段，
/// 缺失的取空字符串/零值，之后的过滤、分组、统计都不再判空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub task_id: i64,
    pub schedule_id: i64,
    pub title: String,
    pub description: String,
    pub teacher_file: String,
    pub created_at: String,
    /// ISO 格式的截止时间，是否过期在展示时实时判断
    pub deadline: String,
    pub max_points: f64,
    pub task_type: TaskType,
    pub class_label: String,
    pub subject_label: String,
    pub status: SubmissionStatus,
    pub answer_file: String,
    pub student_note: String,
    pub submitted_at: String,
    pub grade: Option<f64>,
    pub teacher_note: String,
    pub points_earned: f64,
}

impl From<RawAssignment> for AssignmentRecord {
    fn from(raw: RawAssignment) -> Self {
        let schedule = raw.jadwal_pelajaran.unwrap_or_default();
        let class_label = schedule
            .kelas
            .map(|k| k.nama_kelas)
            .filter(|s| !s.is_empty())
            .unwrap_or_default();
        let subject_label = schedule
            .mata_pelajaran
            .map(|m| m.nama_mapel)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_SUBJECT_LABEL.to_string());

        Self {
            task_id: raw.tugas_id,
            schedule_id: raw.jadwal_id,
            title: raw.judul_tugas,
            description: raw.deskripsi_tugas,
            teacher_file: raw.file_tugas_guru.unwrap_or_default(),
            created_at: raw.tanggal_dibuat,
            deadline: raw.deadline_pengumpulan,
            max_points: raw.poin_maksimal,
            task_type: raw.tipe_tugas,
            class_label,
            subject_label,
            status: raw.status_pengumpulan,
            answer_file: raw.file_jawaban_siswa.unwrap_or_default(),
            student_note: raw.catatan_siswa.unwrap_or_default(),
            submitted_at: raw.tanggal_pengumpulan.unwrap_or_default(),
            grade: raw.nilai,
            teacher_note: raw.catatan_guru.unwrap_or_default(),
            points_earned: raw.poin_didapat,
        }
    }
}

/// 提交明细视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDetailView {
    pub submission_id: i64,
    pub task_id: i64,
    pub answer_file: String,
    pub student_note: String,
    pub submitted_at: String,
    pub grade: Option<f64>,
    pub teacher_note: String,
    pub status: SubmissionStatus,
    pub points_earned: f64,
}

impl From<RawSubmissionDetail> for SubmissionDetailView {
    fn from(raw: RawSubmissionDetail) -> Self {
        Self {
            submission_id: raw.pengumpulan_id,
            task_id: raw.tugas_id,
            answer_file: raw.file_jawaban_siswa.unwrap_or_default(),
            student_note: raw.catatan_siswa.unwrap_or_default(),
            submitted_at: raw.tanggal_pengumpulan,
            grade: raw.nilai,
            teacher_note: raw.catatan_guru.unwrap_or_default(),
            status: raw.status_pengumpulan,
            points_earned: raw.poin_didapat,
        }
    }
}

#[cfg(test)]
impl AssignmentRecord {
    /// 测试用的最小记录构造
    pub(crate) fn sample(task_id: i64, subject: &str, status: SubmissionStatus) -> Self {
        Self {
            task_id,
            schedule_id: 1,
            title: format!("Tugas {task_id}"),
            description: String::new(),
            teacher_file: String::new(),
            created_at: String::new(),
            deadline: "2025-03-10T23:59:00Z".into(),
            max_points: 100.0,
            task_type: TaskType::Individu,
            class_label: "IF 4A".into(),
            subject_label: subject.into(),
            status,
            answer_file: String::new(),
            student_note: String::new(),
            submitted_at: String::new(),
            grade: None,
            teacher_note: String::new(),
            points_earned: 0.0,
        }
    }
}
