use serde::{Deserialize, Serialize};

/// 提交状态（封闭枚举）
///
/// 状态机完全由服务端驱动，客户端只渲染最近一次下发的状态：
/// Belum Mengerjakan -> Mengerjakan（截止前提交）
/// Belum Mengerjakan -> Terlambat（截止后提交）
/// Mengerjakan -> Terlambat（截止时间过去且未评分）
/// Mengerjakan / Terlambat -> Dinilai（教师评分）
/// 未知字符串在反序列化时直接报错，而不是悄悄落到默认值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[serde(rename = "Belum Mengerjakan")]
    BelumMengerjakan,
    Mengerjakan,
    Terlambat,
    Dinilai,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::BelumMengerjakan => "Belum Mengerjakan",
            SubmissionStatus::Mengerjakan => "Mengerjakan",
            SubmissionStatus::Terlambat => "Terlambat",
            SubmissionStatus::Dinilai => "Dinilai",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SubmissionStatus::BelumMengerjakan => "neutral",
            SubmissionStatus::Mengerjakan => "primary",
            SubmissionStatus::Terlambat => "warning",
            SubmissionStatus::Dinilai => "success",
        }
    }
}

/// 任务类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    Individu,
    Kelompok,
}

/// 任务列表接口返回的原始条目，课程表信息以可选嵌套对象下发
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAssignment {
    pub tugas_id: i64,
    #[serde(default)]
    pub jadwal_id: i64,
    #[serde(default)]
    pub judul_tugas: String,
    #[serde(default)]
    pub deskripsi_tugas: String,
    #[serde(default)]
    pub file_tugas_guru: Option<String>,
    #[serde(default)]
    pub tanggal_dibuat: String,
    #[serde(default)]
    pub deadline_pengumpulan: String,
    #[serde(default)]
    pub poin_maksimal: f64,
    pub tipe_tugas: TaskType,
    #[serde(default)]
    pub jadwal_pelajaran: Option<RawSchedule>,
    pub status_pengumpulan: SubmissionStatus,
    #[serde(default)]
    pub file_jawaban_siswa: Option<String>,
    #[serde(default)]
    pub catatan_siswa: Option<String>,
    #[serde(default)]
    pub tanggal_pengumpulan: Option<String>,
    #[serde(default)]
    pub nilai: Option<f64>,
    #[serde(default)]
    pub catatan_guru: Option<String>,
    #[serde(default)]
    pub poin_didapat: f64,
}

/// 嵌套的课程表对象，字段随接口版本摇摆，全部按可选建模，
/// 归一化一次性补默认值，展示层不再做链式判空
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchedule {
    #[serde(default)]
    pub jadwal_id: i64,
    #[serde(default)]
    pub kelas: Option<RawScheduleClass>,
    #[serde(default)]
    pub mata_pelajaran: Option<RawScheduleSubject>,
    #[serde(default)]
    pub hari: Option<String>,
    #[serde(default)]
    pub waktu_mulai: Option<String>,
    #[serde(default)]
    pub waktu_selesai: Option<String>,
    #[serde(default)]
    pub ruang: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScheduleClass {
    #[serde(default)]
    pub nama_kelas: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScheduleSubject {
    #[serde(default)]
    pub nama_mapel: String,
}

/// 提交明细接口返回的原始记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubmissionDetail {
    pub pengumpulan_id: i64,
    pub tugas_id: i64,
    #[serde(default)]
    pub siswa_id: i64,
    #[serde(default)]
    pub file_jawaban_siswa: Option<String>,
    #[serde(default)]
    pub catatan_siswa: Option<String>,
    #[serde(default)]
    pub tanggal_pengumpulan: String,
    #[serde(default)]
    pub nilai: Option<f64>,
    #[serde(default)]
    pub catatan_guru: Option<String>,
    pub status_pengumpulan: SubmissionStatus,
    #[serde(default)]
    pub poin_didapat: f64,
}
