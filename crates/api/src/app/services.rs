use std::sync::Arc;

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId, OrderItemId, ProductId};
use orderdesk_infra::{MemoryStore, OrderItemReconciler, Page, ProductLedger, Store};
use orderdesk_products::{NewProduct, Product};
use orderdesk_sales::{NewOrder, NewOrderItem, Order, OrderItem};

/// Application services: one shared store plus the components that
/// coordinate multi-entity writes on it.
///
/// Plain CRUD talks to the store directly; anything touching product stock
/// or reference integrity goes through the ledger/reconciler.
pub struct AppServices {
    store: Arc<MemoryStore>,
    ledger: ProductLedger<Arc<MemoryStore>>,
    reconciler: OrderItemReconciler<Arc<MemoryStore>>,
}

pub fn build_services() -> AppServices {
    let store = Arc::new(MemoryStore::new());
    AppServices {
        ledger: ProductLedger::new(store.clone()),
        reconciler: OrderItemReconciler::new(store.clone()),
        store,
    }
}

fn check_page_size(size: u64) -> DomainResult<()> {
    if size == 0 {
        return Err(DomainError::validation("size must be at least 1"));
    }
    Ok(())
}

impl AppServices {
    // ---- products ----

    pub fn products_list(&self, page: u64, size: u64) -> DomainResult<Page<Product>> {
        check_page_size(size)?;
        self.store.read(|t| t.products_page(page, size))
    }

    pub fn products_get(&self, id: ProductId) -> DomainResult<Product> {
        self.store
            .read(|t| t.product(id).cloned())?
            .ok_or(DomainError::not_found("product"))
    }

    pub fn products_create(&self, new: NewProduct) -> DomainResult<Product> {
        new.validate()?;
        let product = self.store.transact(|t| Ok(t.insert_product(new)))?;
        tracing::info!(product_id = %product.id(), "product created");
        Ok(product)
    }

    pub fn products_update(&self, id: ProductId, new: NewProduct) -> DomainResult<Product> {
        new.validate()?;
        self.store.transact(|t| {
            let mut product = t
                .product(id)
                .cloned()
                .ok_or(DomainError::not_found("product"))?;
            product.overwrite(new);
            t.save_product(product.clone());
            Ok(product)
        })
    }

    pub fn products_delete(&self, id: ProductId) -> DomainResult<()> {
        self.ledger.delete(id)
    }

    pub fn products_adjust_stock(&self, id: ProductId, delta: i64) -> DomainResult<Product> {
        self.ledger.adjust_stock(id, delta)
    }

    // ---- orders ----

    pub fn orders_list(&self, page: u64, size: u64) -> DomainResult<Page<Order>> {
        check_page_size(size)?;
        self.store.read(|t| t.orders_page(page, size))
    }

    pub fn orders_get(&self, id: OrderId) -> DomainResult<Order> {
        self.store
            .read(|t| t.order(id).cloned())?
            .ok_or(DomainError::not_found("order"))
    }

    pub fn orders_create(&self, new: NewOrder) -> DomainResult<Order> {
        new.validate()?;
        let order = self.store.transact(|t| Ok(t.insert_order(new)))?;
        tracing::info!(order_id = %order.id(), "order created");
        Ok(order)
    }

    pub fn orders_update(&self, id: OrderId, new: NewOrder) -> DomainResult<Order> {
        new.validate()?;
        self.store.transact(|t| {
            let mut order = t.order(id).cloned().ok_or(DomainError::not_found("order"))?;
            order.overwrite(new);
            t.save_order(order.clone());
            Ok(order)
        })
    }

    /// Delete an order; its items go with it (storage-layer cascade, no
    /// stock restoration).
    pub fn orders_delete(&self, id: OrderId) -> DomainResult<()> {
        self.store.transact(|t| {
            t.remove_order(id).ok_or(DomainError::not_found("order"))?;
            Ok(())
        })?;
        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }

    // ---- order items ----

    pub fn order_items_list(&self, page: u64, size: u64) -> DomainResult<Page<OrderItem>> {
        check_page_size(size)?;
        self.store.read(|t| t.order_items_page(page, size))
    }

    pub fn order_items_get(&self, id: OrderItemId) -> DomainResult<OrderItem> {
        self.store
            .read(|t| t.order_item(id).cloned())?
            .ok_or(DomainError::not_found("order item"))
    }

    pub fn order_items_create(&self, new: NewOrderItem) -> DomainResult<OrderItem> {
        self.reconciler.create(new)
    }

    pub fn order_items_update(&self, id: OrderItemId, new: NewOrderItem) -> DomainResult<OrderItem> {
        self.reconciler.update(id, new)
    }

    pub fn order_items_delete(&self, id: OrderItemId) -> DomainResult<()> {
        self.reconciler.delete(id)
    }
}
