//! Product catalogue service, including audited cascade deletion

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    actor_display_name, require_text, validate_amount, validate_sku, ProductType,
    PRODUCT_DELETION_ACTION,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductRow};

/// Product service
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating or updating a product
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub sku: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub product_type: Option<ProductType>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "codigoBarras")]
    pub barcode: Option<String>,
    #[serde(rename = "categoriaId")]
    pub category_id: Option<Uuid>,
    #[serde(rename = "precoCusto")]
    pub cost_price: Option<Decimal>,
    #[serde(rename = "precoVenda")]
    pub sale_price: Option<Decimal>,
    #[serde(rename = "lote")]
    pub batch: Option<String>,
    #[serde(rename = "enderecoLocalizacao")]
    pub location_address: Option<String>,
    #[serde(rename = "fornecedorId")]
    pub supplier_id: Option<Uuid>,
}

impl ProductInput {
    fn validate(&self) -> AppResult<()> {
        validate_sku(self.sku.trim()).map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "O nome do produto é obrigatório.".to_string(),
            ));
        }
        for price in [self.cost_price, self.sale_price].into_iter().flatten() {
            validate_amount(price).map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        }
        Ok(())
    }
}

/// Input for deleting a product
#[derive(Debug, Default, Deserialize)]
pub struct DeleteProductInput {
    #[serde(rename = "motivo")]
    pub reason: Option<String>,
    #[serde(rename = "usuarioId")]
    pub user_id: Option<Uuid>,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a product
    pub async fn create_product(&self, input: ProductInput) -> AppResult<Product> {
        input.validate()?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (sku, name, product_type, description, barcode, category_id,
                                  cost_price, sale_price, batch, location_address, supplier_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, sku, name, product_type, description, barcode, category_id,
                      cost_price, sale_price, batch, location_address, supplier_id, created_at
            "#,
        )
        .bind(input.sku.trim())
        .bind(input.name.trim())
        .bind(input.product_type.unwrap_or_default().as_str())
        .bind(require_text(input.description.as_deref()))
        .bind(require_text(input.barcode.as_deref()))
        .bind(input.category_id)
        .bind(input.cost_price.unwrap_or(Decimal::ZERO))
        .bind(input.sale_price.unwrap_or(Decimal::ZERO))
        .bind(require_text(input.batch.as_deref()))
        .bind(require_text(input.location_address.as_deref()))
        .bind(input.supplier_id)
        .fetch_one(&self.db)
        .await?;

        row.try_into()
    }

    /// Replace a product's descriptive fields
    pub async fn update_product(&self, product_id: Uuid, input: ProductInput) -> AppResult<Product> {
        input.validate()?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET sku = $1, name = $2, product_type = $3, description = $4, barcode = $5,
                category_id = $6, cost_price = $7, sale_price = $8, batch = $9,
                location_address = $10, supplier_id = $11
            WHERE id = $12
            RETURNING id, sku, name, product_type, description, barcode, category_id,
                      cost_price, sale_price, batch, location_address, supplier_id, created_at
            "#,
        )
        .bind(input.sku.trim())
        .bind(input.name.trim())
        .bind(input.product_type.unwrap_or_default().as_str())
        .bind(require_text(input.description.as_deref()))
        .bind(require_text(input.barcode.as_deref()))
        .bind(input.category_id)
        .bind(input.cost_price.unwrap_or(Decimal::ZERO))
        .bind(input.sale_price.unwrap_or(Decimal::ZERO))
        .bind(require_text(input.batch.as_deref()))
        .bind(require_text(input.location_address.as_deref()))
        .bind(input.supplier_id)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        row.try_into()
    }

    /// List all products
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, sku, name, product_type, description, barcode, category_id,
                   cost_price, sale_price, batch, location_address, supplier_id, created_at
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get product by ID
    pub async fn get_product(&self, product_id: Uuid) -> AppResult<Product> {
        sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, sku, name, product_type, description, barcode, category_id,
                   cost_price, sale_price, batch, location_address, supplier_id, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto".to_string()))?
        .try_into()
    }

    /// Delete a product together with its orders, movements and stock,
    /// leaving one audit entry behind. All or nothing.
    pub async fn delete_product(&self, product_id: Uuid, input: DeleteProductInput) -> AppResult<()> {
        let reason = require_text(input.reason.as_deref());
        let (Some(reason), Some(user_id)) = (reason, input.user_id) else {
            return Err(AppError::InvalidArgument(
                "Motivo e identificação do utilizador são obrigatórios para exclusão.".to_string(),
            ));
        };

        let mut tx = self.db.begin().await?;

        let product: Product = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, sku, name, product_type, description, barcode, category_id,
                   cost_price, sale_price, batch, location_address, supplier_id, created_at
            FROM products
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto".to_string()))?
        .try_into()?;

        let actor = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        let actor_name = actor_display_name(actor.as_deref());

        sqlx::query(
            r#"
            INSERT INTO audit_logs (action, item_description, actor_name, reason)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(PRODUCT_DELETION_ACTION)
        .bind(product.audit_description())
        .bind(&actor_name)
        .bind(&reason)
        .execute(&mut *tx)
        .await?;

        // Dependents first, so no foreign key ever points at a missing product
        let orders = sqlx::query("DELETE FROM purchase_orders WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let movements = sqlx::query("DELETE FROM movements WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let stock_records = sqlx::query("DELETE FROM stock_records WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = %product_id,
            sku = %product.sku,
            actor = %actor_name,
            orders,
            movements,
            stock_records,
            "Product deleted with its history"
        );

        Ok(())
    }
}
