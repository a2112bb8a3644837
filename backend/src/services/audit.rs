//! Read access to the audit trail. Entries are only ever written by the
//! operations they describe.

use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{AuditLogEntry, AuditLogRow};

#[derive(Clone)]
pub struct AuditService {
    db: PgPool,
}

impl AuditService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All audit entries, newest first
    pub async fn list_entries(&self) -> AppResult<Vec<AuditLogEntry>> {
        let rows = sqlx::query_as::<_, AuditLogRow>(
            r#"
            SELECT id, action, item_description, actor_name, reason, occurred_at
            FROM audit_logs
            ORDER BY occurred_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
