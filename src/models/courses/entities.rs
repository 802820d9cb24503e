use serde::{Deserialize, Serialize};

/// 后端课程列表条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCourse {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub teacher: RawCourseTeacher,
    // 后端字段为 snake_case，视图层转成 camelCase
    #[serde(default)]
    pub absensi_count: i64,
}

/// 课程条目内嵌的授课教师信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCourseTeacher {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nip: String,
}
