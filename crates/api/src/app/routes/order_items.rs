use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use orderdesk_core::OrderItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_order_items).post(create_order_item))
        .route(
            "/:id",
            get(get_order_item)
                .put(update_order_item)
                .delete(delete_order_item),
        )
}

pub async fn list_order_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    match services.order_items_list(params.page, params.size_or_default()) {
        Ok(page) => (
            StatusCode::OK,
            Json(dto::page_to_json(page, dto::order_item_to_json)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_order_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.order_items_get(id) {
        Ok(item) => (StatusCode::OK, Json(dto::order_item_to_json(item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_order_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::OrderItemRequest>,
) -> axum::response::Response {
    match services.order_items_create(body.into_new()) {
        Ok(item) => (StatusCode::CREATED, Json(dto::order_item_to_json(item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_order_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::OrderItemRequest>,
) -> axum::response::Response {
    let id: OrderItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.order_items_update(id, body.into_new()) {
        Ok(item) => (StatusCode::OK, Json(dto::order_item_to_json(item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_order_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.order_items_delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
