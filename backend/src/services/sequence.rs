//! Sequential document code issuance
//!
//! Each (prefix, year) pair has a counter row in `document_sequences`. The
//! first request of a year seeds the row from the newest code already on
//! record, then every request bumps it with a single `UPDATE … RETURNING`.
//! The row lock from that update is held until the caller's transaction
//! ends, so two transactions can never be handed the same code.

use chrono::{Local, Utc};
use shared::{document_year, format_code, last_sequence, year_suffix, DocumentType};
use sqlx::{PgConnection, Postgres, Transaction};

use crate::error::{AppError, AppResult};

/// Issues document codes inside the caller's transaction
pub struct SequenceService;

impl SequenceService {
    /// Year used for codes issued now, on the server's local calendar
    pub fn current_year() -> i32 {
        document_year(Utc::now(), *Local::now().offset())
    }

    /// Reserve the next code for `doc_type` in `year`.
    ///
    /// The reservation is part of `tx`: if the transaction rolls back, the
    /// counter rolls back with it and the code is never consumed.
    pub async fn next_code(
        tx: &mut Transaction<'_, Postgres>,
        doc_type: DocumentType,
        year: i32,
    ) -> AppResult<String> {
        let suffix = year_suffix(year);

        let counter_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM document_sequences WHERE doc_type = $1 AND year_suffix = $2)",
        )
        .bind(doc_type.prefix())
        .bind(&suffix)
        .fetch_one(&mut **tx)
        .await?;

        if !counter_exists {
            let seed = Self::newest_issued_sequence(&mut **tx, doc_type, year).await?;
            let seed = i32::try_from(seed).map_err(|_| {
                AppError::Internal(format!("Sequence seed out of range: {}", seed))
            })?;

            // A concurrent first issuer may have seeded the row already
            sqlx::query(
                r#"
                INSERT INTO document_sequences (doc_type, year_suffix, last_value)
                VALUES ($1, $2, $3)
                ON CONFLICT (doc_type, year_suffix) DO NOTHING
                "#,
            )
            .bind(doc_type.prefix())
            .bind(&suffix)
            .bind(seed)
            .execute(&mut **tx)
            .await?;
        }

        let issued = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE document_sequences
            SET last_value = last_value + 1
            WHERE doc_type = $1 AND year_suffix = $2
            RETURNING last_value
            "#,
        )
        .bind(doc_type.prefix())
        .bind(&suffix)
        .fetch_one(&mut **tx)
        .await?;

        let issued = u32::try_from(issued)
            .map_err(|_| AppError::Internal(format!("Negative sequence value: {}", issued)))?;
        let code = format_code(doc_type, issued, year);

        tracing::debug!(doc_type = %doc_type, code = %code, "Issued document code");

        Ok(code)
    }

    /// Sequence of the most recently created document of this type and
    /// year, or 0 when there is none or its code is malformed.
    async fn newest_issued_sequence(
        conn: &mut PgConnection,
        doc_type: DocumentType,
        year: i32,
    ) -> AppResult<u32> {
        let pattern = format!("{}%{}", doc_type.prefix(), year_suffix(year));

        let last_code = match doc_type {
            DocumentType::Purchase => {
                sqlx::query_scalar::<_, String>(
                    r#"
                    SELECT code FROM purchase_orders
                    WHERE code LIKE $1
                    ORDER BY created_at DESC
                    LIMIT 1
                    "#,
                )
                .bind(&pattern)
                .fetch_optional(&mut *conn)
                .await?
            }
            DocumentType::Inbound | DocumentType::Outbound => {
                sqlx::query_scalar::<_, String>(
                    r#"
                    SELECT code FROM movements
                    WHERE code LIKE $1
                    ORDER BY occurred_at DESC
                    LIMIT 1
                    "#,
                )
                .bind(&pattern)
                .fetch_optional(&mut *conn)
                .await?
            }
        };

        Ok(last_sequence(last_code.as_deref(), doc_type, year))
    }
}
