use serde::{Deserialize, Serialize};

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::responses::{AttendanceRecord, CourseInfoView};
use crate::services::Loaded;

/// 考勤页的组合视图：课程信息头 + 明细记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendancePage {
    pub course: CourseInfoView,
    pub records: Vec<AttendanceRecord>,
}

pub async fn load_detail(
    service: &AttendanceService,
    schedule_id: i64,
    student_id: i64,
) -> Result<Loaded<AttendancePage>> {
    let token = service.loads().begin();

    // 两个请求同时发出；任一失败则整页按失败处理，不展示半加载的数据
    let outcome = futures_util::try_join!(
        service.backend().fetch_course_info(schedule_id),
        service
            .backend()
            .fetch_attendance_detail(schedule_id, student_id),
    );

    if !service.loads().is_current(token) {
        tracing::debug!("hasil pemuatan absensi kedaluwarsa, diabaikan");
        return Ok(Loaded::Stale);
    }

    let (info, meetings) = outcome?;
    Ok(Loaded::Fresh(AttendancePage {
        course: CourseInfoView::from(info),
        records: meetings.into_iter().map(AttendanceRecord::from).collect(),
    }))
}
