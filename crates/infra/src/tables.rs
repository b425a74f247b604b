//! All persisted state: products, orders and order items, keyed by id.
//!
//! `Tables` is the unit a [`crate::store::Store`] transaction operates on.
//! It hands out store-assigned sequential ids (starting at 1) and hosts the
//! storage-level rules that belong to the data itself: the non-negative
//! stock write path, reference-existence checks, and the cascade that
//! removes an order's items together with the order.

use std::collections::BTreeMap;

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId, OrderItemId, ProductId};
use orderdesk_products::{NewProduct, Product};
use orderdesk_sales::{NewOrder, NewOrderItem, Order, OrderItem};

use crate::store::Page;

#[derive(Debug, Clone, Default)]
pub struct Tables {
    products: BTreeMap<ProductId, Product>,
    orders: BTreeMap<OrderId, Order>,
    order_items: BTreeMap<OrderItemId, OrderItem>,
    next_product_id: u64,
    next_order_id: u64,
    next_order_item_id: u64,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- products ----

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn insert_product(&mut self, new: NewProduct) -> Product {
        self.next_product_id += 1;
        let product = Product::from_parts(ProductId::new(self.next_product_id), new);
        self.products.insert(*product.id(), product.clone());
        product
    }

    pub fn save_product(&mut self, product: Product) {
        self.products.insert(*product.id(), product);
    }

    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        self.products.remove(&id)
    }

    pub fn products_page(&self, number: u64, size: u64) -> Page<Product> {
        page_of(&self.products, number, size)
    }

    /// Apply a stock delta to a product in place.
    ///
    /// Fails `NotFound` when the product is absent and `InsufficientStock`
    /// when the delta would leave stock negative; the product is unchanged
    /// on failure. Returns the updated product.
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> DomainResult<Product> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(DomainError::not_found("product"))?;
        product.adjust_stock(delta)?;
        Ok(product.clone())
    }

    /// Whether any order item still references the product.
    pub fn product_in_use(&self, id: ProductId) -> bool {
        self.order_items.values().any(|item| item.product_id() == id)
    }

    // ---- orders ----

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub fn insert_order(&mut self, new: NewOrder) -> Order {
        self.next_order_id += 1;
        let order = Order::from_parts(OrderId::new(self.next_order_id), new);
        self.orders.insert(*order.id(), order.clone());
        order
    }

    pub fn save_order(&mut self, order: Order) {
        self.orders.insert(*order.id(), order);
    }

    /// Remove an order and cascade-remove its items.
    ///
    /// The cascade does not restore product stock; it mirrors the storage
    /// layer's removal semantics, not the reconciler's delete path.
    pub fn remove_order(&mut self, id: OrderId) -> Option<Order> {
        let order = self.orders.remove(&id)?;
        self.order_items.retain(|_, item| item.order_id() != id);
        Some(order)
    }

    pub fn orders_page(&self, number: u64, size: u64) -> Page<Order> {
        page_of(&self.orders, number, size)
    }

    // ---- order items ----

    pub fn order_item(&self, id: OrderItemId) -> Option<&OrderItem> {
        self.order_items.get(&id)
    }

    pub fn insert_order_item(&mut self, new: NewOrderItem) -> OrderItem {
        self.next_order_item_id += 1;
        let item = OrderItem::from_parts(OrderItemId::new(self.next_order_item_id), new);
        self.order_items.insert(*item.id(), item.clone());
        item
    }

    /// Overwrite an existing item's fields, keeping its identity.
    pub fn replace_order_item(&mut self, id: OrderItemId, new: NewOrderItem) -> Option<OrderItem> {
        let item = self.order_items.get_mut(&id)?;
        item.overwrite(new);
        Some(item.clone())
    }

    pub fn remove_order_item(&mut self, id: OrderItemId) -> Option<OrderItem> {
        self.order_items.remove(&id)
    }

    pub fn items_for_order(&self, order_id: OrderId) -> Vec<OrderItem> {
        self.order_items
            .values()
            .filter(|item| item.order_id() == order_id)
            .cloned()
            .collect()
    }

    pub fn order_items_page(&self, number: u64, size: u64) -> Page<OrderItem> {
        page_of(&self.order_items, number, size)
    }
}

fn page_of<K: Ord, V: Clone>(map: &BTreeMap<K, V>, number: u64, size: u64) -> Page<V> {
    let total_elements = map.len() as u64;
    let total_pages = if size == 0 {
        0
    } else {
        total_elements.div_ceil(size)
    };
    let content = map
        .values()
        .skip((number.saturating_mul(size)) as usize)
        .take(size as usize)
        .cloned()
        .collect();
    Page {
        content,
        total_elements,
        total_pages,
        number,
    }
}
