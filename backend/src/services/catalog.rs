//! Categories and storage locations

use serde::Deserialize;
use shared::require_text;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Category, CategoryRow, Location, LocationRow};

#[derive(Clone)]
pub struct CatalogService {
    db: PgPool,
}

#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationInput {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "zona")]
    pub zone: Option<String>,
    #[serde(rename = "corredor")]
    pub aisle: Option<String>,
    #[serde(rename = "prateleira")]
    pub shelf: Option<String>,
}

impl CatalogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description FROM categories ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn create_category(&self, input: CategoryInput) -> AppResult<Category> {
        let name = require_text(Some(input.name.as_str())).ok_or_else(|| {
            AppError::InvalidArgument("O nome da categoria é obrigatório.".to_string())
        })?;

        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(name)
        .bind(require_text(input.description.as_deref()))
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    pub async fn list_locations(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            "SELECT id, code, zone, aisle, shelf FROM locations ORDER BY code",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Location codes are unique; a repeat is reported as a conflict
    pub async fn create_location(&self, input: LocationInput) -> AppResult<Location> {
        let code = require_text(Some(input.code.as_str())).ok_or_else(|| {
            AppError::InvalidArgument("O código da localização é obrigatório.".to_string())
        })?;

        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            INSERT INTO locations (code, zone, aisle, shelf)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code, zone, aisle, shelf
            "#,
        )
        .bind(code)
        .bind(require_text(input.zone.as_deref()))
        .bind(require_text(input.aisle.as_deref()))
        .bind(require_text(input.shelf.as_deref()))
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }
}
