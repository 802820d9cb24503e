use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::responses::SubmissionDetailView;

pub async fn submission_detail(
    service: &AssignmentService,
    task_id: i64,
) -> Result<SubmissionDetailView> {
    let raw = service.backend().fetch_submission_detail(task_id).await?;
    Ok(SubmissionDetailView::from(raw))
}
