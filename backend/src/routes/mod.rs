//! Route definitions for the inventory platform
//!
//! Paths match the ones the web front-end already calls, so they are
//! mounted at the root rather than under a version prefix.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .nest("/usuarios", user_routes())
        .nest("/fornecedores", supplier_routes())
        .route(
            "/categorias",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/localizacoes",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .nest("/produtos", product_routes())
        .route("/estoque", get(handlers::list_stock).post(handlers::open_stock))
        .nest("/movimentacoes", movement_routes())
        .nest("/pedidos-compra", purchase_order_routes())
        .route("/logs-auditoria", get(handlers::list_audit_entries))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/:id",
            put(handlers::update_user).delete(handlers::delete_user),
        )
}

fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route(
            "/:id",
            put(handlers::update_supplier).delete(handlers::delete_supplier),
        )
}

/// Product routes, including the audited cascade delete
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/:id/movimentacoes", get(handlers::get_product_movements))
}

fn movement_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_movements))
        .route("/operacao", post(handlers::apply_movement))
}

fn purchase_order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders).post(handlers::issue_order))
        .route("/:id/receber", put(handlers::receive_order))
}
