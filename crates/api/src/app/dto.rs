use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use orderdesk_core::{Entity, OrderId, ProductId};
use orderdesk_infra::Page;
use orderdesk_products::{NewProduct, Product};
use orderdesk_sales::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u64,
    pub size: Option<u64>,
}

impl PageParams {
    pub fn size_or_default(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductRequest {
    pub fn into_new(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    #[serde(default)]
    pub ordered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl OrderRequest {
    pub fn into_new(self) -> NewOrder {
        NewOrder {
            customer_name: self.customer_name,
            ordered_at: self.ordered_at,
            status: self.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderItemRequest {
    pub fn into_new(self) -> NewOrderItem {
        NewOrderItem {
            order_id: OrderId::new(self.order_id),
            product_id: ProductId::new(self.product_id),
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: Product) -> JsonValue {
    serde_json::json!({
        "id": product.id().as_u64(),
        "name": product.name(),
        "price": product.price(),
        "stock": product.stock(),
    })
}

pub fn order_to_json(order: Order) -> JsonValue {
    serde_json::json!({
        "id": order.id().as_u64(),
        "customer_name": order.customer_name(),
        "ordered_at": order.ordered_at().to_rfc3339(),
        "status": order.status(),
    })
}

pub fn order_item_to_json(item: OrderItem) -> JsonValue {
    serde_json::json!({
        "id": item.id().as_u64(),
        "order_id": item.order_id().as_u64(),
        "product_id": item.product_id().as_u64(),
        "quantity": item.quantity(),
        "unit_price": item.unit_price(),
    })
}

/// Pagination envelope: `{content, totalElements, totalPages, number}`.
pub fn page_to_json<T>(page: Page<T>, f: impl FnMut(T) -> JsonValue) -> JsonValue {
    let page = page.map(f);
    serde_json::json!({
        "content": page.content,
        "totalElements": page.total_elements,
        "totalPages": page.total_pages,
        "number": page.number,
    })
}
