use serde::{Deserialize, Serialize};

/// 考勤明细接口返回的单次课堂记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMeeting {
    pub id_pertemuan: i64,
    #[serde(default)]
    pub pertemuan_ke: i64,
    #[serde(default)]
    pub tanggal_pertemuan: String,
    #[serde(default)]
    pub materi_pertemuan: String,
    #[serde(default)]
    pub token_absen: String,
    // 学生未打卡时后端不下发以下字段
    #[serde(default)]
    pub status_kehadiran: Option<String>,
    #[serde(default)]
    pub waktu_absen: Option<String>,
    #[serde(default)]
    pub id_absensi: Option<i64>,
}

/// 课程信息接口返回的课程头
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCourseInfo {
    pub id_jadwal_pelajaran: i64,
    #[serde(default)]
    pub nama_mapel: String,
    #[serde(default)]
    pub nama_kelas: String,
    #[serde(default)]
    pub guru_pengampu: String,
    #[serde(default)]
    pub nip_guru: Option<String>,
}
