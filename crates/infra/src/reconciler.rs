//! Order-item reconciliation (application-level orchestration).
//!
//! Every order-item mutation carries a stock consequence: creating an item
//! reserves units, resizing one moves the reservation, deleting one returns
//! it. This module centralizes that pairing so no caller can persist an item
//! without the matching product write.
//!
//! ## Execution flow
//!
//! ```text
//! request
//!   ↓
//! 1. Validate input (structural checks, before any store access)
//!   ↓
//! 2. Open one unit of work on the injected store
//!   ↓
//! 3. Resolve references, apply the stock delta, write the item
//!   ↓
//! 4. Commit (any error discards everything)
//! ```
//!
//! The store serializes writers, so the stock check and the stock write land
//! in the same isolated transaction; two concurrent reservations can never
//! both commit against the same units.

use orderdesk_core::{DomainError, DomainResult, Entity, OrderItemId};
use orderdesk_sales::{NewOrderItem, OrderItem};

use crate::store::Store;

/// Reusable mutation engine for order items.
///
/// Generic over the store so tests run against [`crate::MemoryStore`] and a
/// real backend can slot in without touching this logic.
#[derive(Debug, Clone)]
pub struct OrderItemReconciler<S> {
    store: S,
}

impl<S> OrderItemReconciler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: Store> OrderItemReconciler<S> {
    /// Create an order item, reserving `quantity` units of the product.
    ///
    /// Fails `NotFound("product")` / `NotFound("order")` when a reference is
    /// dangling and `InsufficientStock` when the product cannot cover the
    /// quantity. On any failure the stock deduction is rolled back with the
    /// rest of the unit of work.
    pub fn create(&self, new: NewOrderItem) -> DomainResult<OrderItem> {
        new.validate()?;
        let item = self.store.transact(|t| {
            t.adjust_stock(new.product_id, -new.quantity)?;
            if t.order(new.order_id).is_none() {
                return Err(DomainError::not_found("order"));
            }
            Ok(t.insert_order_item(new))
        })?;
        tracing::info!(
            item_id = %item.id(),
            order_id = %item.order_id(),
            product_id = %item.product_id(),
            quantity = item.quantity(),
            "order item created"
        );
        Ok(item)
    }

    /// Replace an existing item, moving its stock reservation by the
    /// quantity delta.
    ///
    /// The delta (`new.quantity - existing.quantity`) is applied to the
    /// product named by the request. When the request points the item at a
    /// different product, the old product's reservation stays in place: only
    /// the new product is checked and adjusted.
    pub fn update(&self, id: OrderItemId, new: NewOrderItem) -> DomainResult<OrderItem> {
        new.validate()?;
        let item = self.store.transact(|t| {
            let existing_quantity = t
                .order_item(id)
                .ok_or(DomainError::not_found("order item"))?
                .quantity();

            // Positive delta consumes more stock; negative always passes the
            // stock check and returns units.
            let delta = new.quantity - existing_quantity;
            t.adjust_stock(new.product_id, -delta)?;

            if t.order(new.order_id).is_none() {
                return Err(DomainError::not_found("order"));
            }
            t.replace_order_item(id, new)
                .ok_or(DomainError::not_found("order item"))
        })?;
        tracing::info!(
            item_id = %item.id(),
            product_id = %item.product_id(),
            quantity = item.quantity(),
            "order item updated"
        );
        Ok(item)
    }

    /// Delete an order item, returning its full quantity to the referenced
    /// product's stock.
    pub fn delete(&self, id: OrderItemId) -> DomainResult<()> {
        self.store.transact(|t| {
            let item = t
                .order_item(id)
                .cloned()
                .ok_or(DomainError::not_found("order item"))?;
            t.adjust_stock(item.product_id(), item.quantity())?;
            t.remove_order_item(id);
            Ok(())
        })?;
        tracing::info!(item_id = %id, "order item deleted");
        Ok(())
    }
}
