use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use orderdesk_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/adjust-stock", post(adjust_stock))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    match services.products_list(params.page, params.size_or_default()) {
        Ok(page) => (
            StatusCode::OK,
            Json(dto::page_to_json(page, dto::product_to_json)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.products_get(id) {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    match services.products_create(body.into_new()) {
        Ok(product) => (StatusCode::CREATED, Json(dto::product_to_json(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.products_update(id, body.into_new()) {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.products_delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn adjust_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustStockRequest>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.products_adjust_stock(id, body.delta) {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
