// src/lib.rs

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use services::image_store::ImageStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub images: Arc<dyn ImageStore>,
}

pub mod entities {
    pub mod prelude;

    pub mod activity_logs;
    pub mod manufacturing_batches;
    pub mod manufacturing_costs;
    pub mod price_records;
    pub mod product_images;
    pub mod product_specifications;
    pub mod products;
    pub mod users;
}

pub mod services {
    pub mod activity_log;
    pub mod cost_report;
    pub mod image_store;
    pub mod product_intake;
}

pub mod auth;
pub mod handlers;
pub mod models;

/// Multipart bodies carry image files; 20 MB covers a full submission
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Only the mutating route requires an identified user
    let mutating = Router::new()
        .route("/api/products", post(handlers::product::create_product))
        .route_layer(middleware::from_fn(auth::require_user));

    Router::new()
        .merge(mutating)
        .route(
            "/api/products/categories",
            get(handlers::product::list_categories),
        )
        .route(
            "/api/manufacturing-costs",
            get(handlers::manufacturing_cost::list_manufacturing_costs),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
