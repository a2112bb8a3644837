use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::AuditLogEntry;
use crate::services::AuditService;
use crate::AppState;

/// List audit entries, newest first
pub async fn list_audit_entries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AuditLogEntry>>> {
    let service = AuditService::new(state.db);
    Ok(Json(service.list_entries().await?))
}
