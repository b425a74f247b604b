use axum::{routing::get, Router};

pub mod order_items;
pub mod orders;
pub mod products;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api/products", products::router())
        .nest("/api/orders", orders::router())
        .nest("/api/order-items", order_items::router())
}
