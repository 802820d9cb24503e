use crate::errors::Result;
use crate::models::assignments::entities::{RawAssignment, RawSubmissionDetail};
use crate::models::assignments::requests::SubmitRequest;
use crate::models::attendance::entities::{RawCourseInfo, RawMeeting};
use crate::models::auth::requests::RegisterGuruRequest;
use crate::models::courses::entities::RawCourse;
use crate::models::files::entities::LocalFile;
use crate::models::files::responses::UploadedFile;

/// 课程列表的查询维度：按学生或按班级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseScope {
    Siswa(i64),
    Kelas(i64),
}

impl CourseScope {
    pub(crate) fn path(&self) -> String {
        match self {
            CourseScope::Siswa(id) => format!("/matapelajaran/siswa/{id}"),
            CourseScope::Kelas(id) => format!("/matapelajaran/kelas/{id}"),
        }
    }
}

/// 后端 API 的全部远程操作
#[async_trait::async_trait]
pub trait ApiBackend: Send + Sync {
    /// 课程管理方法
    // 拉取课程列表
    async fn fetch_courses(&self, scope: CourseScope) -> Result<Vec<RawCourse>>;

    /// 考勤方法
    // 拉取某课程的考勤明细
    async fn fetch_attendance_detail(
        &self,
        schedule_id: i64,
        student_id: i64,
    ) -> Result<Vec<RawMeeting>>;
    // 拉取课程信息头
    async fn fetch_course_info(&self, schedule_id: i64) -> Result<RawCourseInfo>;

    /// 作业方法
    // 拉取学生的任务列表
    async fn fetch_assignments(&self) -> Result<Vec<RawAssignment>>;
    // 拉取提交明细
    async fn fetch_submission_detail(&self, task_id: i64) -> Result<RawSubmissionDetail>;
    // 提交/更新作业
    async fn submit_assignment(&self, task_id: i64, request: &SubmitRequest) -> Result<()>;
    // 撤回提交
    async fn delete_submission(&self, task_id: i64) -> Result<()>;

    /// 文件方法
    // 上传单个文件
    async fn upload_file(&self, file: &LocalFile) -> Result<UploadedFile>;

    /// 认证方法
    // 教师注册
    async fn register_guru(&self, request: &RegisterGuruRequest) -> Result<()>;
}
