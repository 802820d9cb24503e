use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use super::backend::{ApiBackend, CourseScope};
use crate::config::ApiConfig;
use crate::errors::{PortalError, Result};
use crate::models::Envelope;
use crate::models::assignments::entities::{RawAssignment, RawSubmissionDetail};
use crate::models::assignments::requests::SubmitRequest;
use crate::models::attendance::entities::{RawCourseInfo, RawMeeting};
use crate::models::auth::requests::RegisterGuruRequest;
use crate::models::courses::entities::RawCourse;
use crate::models::files::entities::LocalFile;
use crate::models::files::responses::UploadedFile;

/// 只读注入的 Bearer 令牌
///
/// 令牌的写入（登录/登出）不在本核心内，这里只负责携带。
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for AuthToken {
    // 日志里不打印令牌本体
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// 基于 Reqwest 的 `ApiBackend` 实现
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    token: AuthToken,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, token: AuthToken) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// 按配置构建，带连接/请求超时
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.timeouts.connect))
            .timeout(Duration::from_millis(config.timeouts.request))
            .build()
            .map_err(|e| PortalError::configuration(format!("gagal membangun klien HTTP: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: AuthToken::new(config.token.clone()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 401 必须先于一般非 2xx 判定，转成独立的会话失效错误
    fn ensure_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(PortalError::session_expired(
                "HTTP 401: sesi login sudah berakhir",
            ));
        }
        if !status.is_success() {
            return Err(PortalError::remote_data(format!(
                "HTTP error! status: {status}"
            )));
        }
        Ok(response)
    }

    /// 解包 `{success, data, count}` 信封并取出 data
    async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::ensure_status(response)?;
        let envelope: Envelope<T> = response.json().await?;
        envelope.into_data()
    }

    /// 只确认成功信封，不关心 data
    async fn read_ack(response: reqwest::Response) -> Result<()> {
        let response = Self::ensure_status(response)?;
        let envelope: Envelope<serde_json::Value> = response.json().await?;
        if !envelope.success {
            return Err(PortalError::remote_data("server melaporkan success=false"));
        }
        Ok(())
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!("GET {}", path);
        self.http
            .get(self.url(path))
            .header(AUTHORIZATION, self.token.header_value())
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!("POST {}", path);
        self.http
            .post(self.url(path))
            .header(AUTHORIZATION, self.token.header_value())
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!("DELETE {}", path);
        self.http
            .delete(self.url(path))
            .header(AUTHORIZATION, self.token.header_value())
    }
}

#[async_trait::async_trait]
impl ApiBackend for HttpBackend {
    async fn fetch_courses(&self, scope: CourseScope) -> Result<Vec<RawCourse>> {
        let response = self.get(&scope.path()).send().await?;
        Self::read_envelope(response).await
    }

    async fn fetch_attendance_detail(
        &self,
        schedule_id: i64,
        student_id: i64,
    ) -> Result<Vec<RawMeeting>> {
        let path = format!("/detail-absensi/jadwal/{schedule_id}?siswa_id={student_id}");
        let response = self.get(&path).send().await?;
        Self::read_envelope(response).await
    }

    async fn fetch_course_info(&self, schedule_id: i64) -> Result<RawCourseInfo> {
        let path = format!("/detail-absensi/course-info/{schedule_id}");
        let response = self.get(&path).send().await?;
        Self::read_envelope(response).await
    }

    async fn fetch_assignments(&self) -> Result<Vec<RawAssignment>> {
        let response = self.get("/siswa/tugas").send().await?;
        Self::read_envelope(response).await
    }

    async fn fetch_submission_detail(&self, task_id: i64) -> Result<RawSubmissionDetail> {
        let path = format!("/siswa/tugas/{task_id}/detail");
        let response = self.get(&path).send().await?;
        Self::read_envelope(response).await
    }

    async fn submit_assignment(&self, task_id: i64, request: &SubmitRequest) -> Result<()> {
        let path = format!("/siswa/tugas/{task_id}/submit");
        let response = self.post(&path).json(request).send().await?;
        Self::read_ack(response).await
    }

    async fn delete_submission(&self, task_id: i64) -> Result<()> {
        let path = format!("/siswa/tugas/{task_id}/submit");
        let response = self.delete(&path).send().await?;
        Self::read_ack(response).await
    }

    async fn upload_file(&self, file: &LocalFile) -> Result<UploadedFile> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.post("/upload/tugas").multipart(form).send().await?;
        let response = Self::ensure_status(response)?;
        // 上传接口直接返回 {url, filename}，没有信封
        let uploaded: UploadedFile = response.json().await?;
        Ok(uploaded)
    }

    async fn register_guru(&self, request: &RegisterGuruRequest) -> Result<()> {
        let response = self.post("/auth/register-guru").json(request).send().await?;
        Self::read_ack(response).await
    }
}
