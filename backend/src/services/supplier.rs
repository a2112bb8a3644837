//! Supplier registry

use serde::Deserialize;
use shared::{require_text, validate_cnpj};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Supplier, SupplierRow};

/// Supplier service
#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
}

/// Input for creating or updating a supplier
#[derive(Debug, Deserialize, Validate)]
pub struct SupplierInput {
    #[serde(rename = "nomeEmpresa")]
    #[validate(length(min = 1))]
    pub company_name: String,
    pub cnpj: Option<String>,
    #[serde(rename = "contatoNome")]
    pub contact_name: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl SupplierInput {
    fn check(&self) -> AppResult<()> {
        self.validate()?;
        if let Some(cnpj) = require_text(self.cnpj.as_deref()) {
            validate_cnpj(&cnpj).map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        }
        Ok(())
    }
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List suppliers by company name
    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let rows = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT id, company_name, cnpj, contact_name, phone, email, created_at
            FROM suppliers
            ORDER BY company_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Register a supplier
    pub async fn create_supplier(&self, input: SupplierInput) -> AppResult<Supplier> {
        input.check()?;

        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            INSERT INTO suppliers (company_name, cnpj, contact_name, phone, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, company_name, cnpj, contact_name, phone, email, created_at
            "#,
        )
        .bind(input.company_name.trim())
        .bind(require_text(input.cnpj.as_deref()))
        .bind(require_text(input.contact_name.as_deref()))
        .bind(require_text(input.phone.as_deref()))
        .bind(require_text(input.email.as_deref()))
        .fetch_one(&self.db)
        .await?;

        tracing::info!(supplier_id = %row.id, "Supplier registered");
        Ok(row.into())
    }

    /// Update a supplier's details
    pub async fn update_supplier(
        &self,
        supplier_id: Uuid,
        input: SupplierInput,
    ) -> AppResult<Supplier> {
        input.check()?;

        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            UPDATE suppliers
            SET company_name = $1, cnpj = $2, contact_name = $3, phone = $4, email = $5
            WHERE id = $6
            RETURNING id, company_name, cnpj, contact_name, phone, email, created_at
            "#,
        )
        .bind(input.company_name.trim())
        .bind(require_text(input.cnpj.as_deref()))
        .bind(require_text(input.contact_name.as_deref()))
        .bind(require_text(input.phone.as_deref()))
        .bind(require_text(input.email.as_deref()))
        .bind(supplier_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Fornecedor".to_string()))?;

        Ok(row.into())
    }

    /// Delete a supplier. Fails while products or orders still reference it.
    pub async fn delete_supplier(&self, supplier_id: Uuid) -> AppResult<()> {
        let deleted = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(supplier_id)
            .execute(&self.db)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::NotFound("Fornecedor".to_string()));
        }
        Ok(())
    }
}
