use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::responses::AssignmentRecord;
use crate::services::Loaded;

pub async fn load_assignments(
    service: &AssignmentService,
) -> Result<Loaded<Vec<AssignmentRecord>>> {
    let token = service.loads().begin();
    let outcome = service.backend().fetch_assignments().await;

    if !service.loads().is_current(token) {
        tracing::debug!("hasil pemuatan tugas kedaluwarsa, diabaikan");
        return Ok(Loaded::Stale);
    }

    let raw = outcome?;
    let records: Vec<AssignmentRecord> = raw.into_iter().map(AssignmentRecord::from).collect();
    tracing::debug!("memuat {} tugas", records.len());
    Ok(Loaded::Fresh(records))
}
