use serde::{Deserialize, Serialize};

use super::entities::{RawCourseInfo, RawMeeting};

/// 出勤状态（封闭枚举）
///
/// 后端下发的是自由字符串，这里统一收敛：大小写不敏感，
/// "tidak hadir" 归入 Alpha，未打卡/无法识别的值归入 Belum。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Hadir,
    Izin,
    Sakit,
    Alpha,
    Belum,
}

impl AttendanceStatus {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("hadir") => AttendanceStatus::Hadir,
            Some("izin") => AttendanceStatus::Izin,
            Some("sakit") => AttendanceStatus::Sakit,
            Some("alpha") | Some("tidak hadir") => AttendanceStatus::Alpha,
            _ => AttendanceStatus::Belum,
        }
    }

    /// 展示用文案
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Hadir => "Hadir",
            AttendanceStatus::Izin => "Izin",
            AttendanceStatus::Sakit => "Sakit",
            AttendanceStatus::Alpha => "Alpha",
            AttendanceStatus::Belum => "Belum Absen",
        }
    }

    /// 状态对应的 UI 色板标记
    pub fn color(&self) -> &'static str {
        match self {
            AttendanceStatus::Hadir => "success",
            AttendanceStatus::Izin | AttendanceStatus::Sakit => "warning",
            AttendanceStatus::Alpha => "danger",
            AttendanceStatus::Belum => "neutral",
        }
    }
}

/// 考勤明细表格的行视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub meeting_id: i64,
    pub meeting_number: i64,
    pub meeting_date: String,
    pub material: String,
    pub status: AttendanceStatus,
    pub token: String,
    pub attended_at: String,
}

impl From<RawMeeting> for AttendanceRecord {
    fn from(raw: RawMeeting) -> Self {
        Self {
            meeting_id: raw.id_pertemuan,
            meeting_number: raw.pertemuan_ke,
            meeting_date: raw.tanggal_pertemuan,
            material: raw.materi_pertemuan,
            status: AttendanceStatus::from_raw(raw.status_kehadiran.as_deref()),
            token: raw.token_absen,
            attended_at: raw.waktu_absen.unwrap_or_default(),
        }
    }
}

/// 考勤页顶部的课程信息视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfoView {
    pub schedule_id: i64,
    pub subject_name: String,
    pub class_name: String,
    pub teacher_name: String,
    pub teacher_nip: String,
}

impl From<RawCourseInfo> for CourseInfoView {
    fn from(raw: RawCourseInfo) -> Self {
        Self {
            schedule_id: raw.id_jadwal_pelajaran,
            subject_name: raw.nama_mapel,
            class_name: raw.nama_kelas,
            teacher_name: raw.guru_pengampu,
            teacher_nip: raw.nip_guru.unwrap_or_default(),
        }
    }
}
