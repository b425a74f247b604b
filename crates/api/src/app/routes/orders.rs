use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use orderdesk_core::OrderId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    match services.orders_list(params.page, params.size_or_default()) {
        Ok(page) => (
            StatusCode::OK,
            Json(dto::page_to_json(page, dto::order_to_json)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.orders_get(id) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::OrderRequest>,
) -> axum::response::Response {
    match services.orders_create(body.into_new()) {
        Ok(order) => (StatusCode::CREATED, Json(dto::order_to_json(order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::OrderRequest>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.orders_update(id, body.into_new()) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.orders_delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
