use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::assignments::responses::AssignmentRecord;

/// 撤回提交，成功后整表重拉（与提交同一条一致性规则）
pub async fn delete_submission(
    service: &AssignmentService,
    task_id: i64,
) -> Result<Vec<AssignmentRecord>> {
    service
        .backend()
        .delete_submission(task_id)
        .await
        .map_err(as_delete_error)?;

    let raw = service
        .backend()
        .fetch_assignments()
        .await
        .map_err(as_delete_error)?;

    tracing::info!("pengumpulan tugas {} dihapus", task_id);
    Ok(raw.into_iter().map(AssignmentRecord::from).collect())
}

fn as_delete_error(err: PortalError) -> PortalError {
    if err.is_session_expired() {
        err
    } else {
        PortalError::submission(format!(
            "Gagal menghapus pengumpulan tugas: {}",
            err.message()
        ))
    }
}
