use serde::{Deserialize, Serialize};

use super::entities::RawCourse;

/// 课程卡片视图模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseView {
    pub id: String,
    pub title: String,
    pub class: String,
    pub semester: String,
    pub teacher: CourseTeacherView,
    #[serde(rename = "absensiCount")]
    pub absensi_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseTeacherView {
    pub name: String,
    pub nip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// 纯字段改名/整形，不带业务逻辑；缺省字段在实体层已经补空
impl From<RawCourse> for CourseView {
    fn from(raw: RawCourse) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            class: raw.class,
            semester: raw.semester,
            teacher: CourseTeacherView {
                name: raw.teacher.name,
                nip: raw.teacher.nip,
                avatar: None,
            },
            absensi_count: raw.absensi_count,
        }
    }
}
