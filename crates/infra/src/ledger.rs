//! Product ledger: the only sanctioned write paths into product stock and
//! product removal.

use orderdesk_core::{DomainError, DomainResult, ProductId};
use orderdesk_products::Product;

use crate::store::Store;

/// Stock and lifecycle operations on products, each one atomic against the
/// injected store.
#[derive(Debug, Clone)]
pub struct ProductLedger<S> {
    store: S,
}

impl<S> ProductLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: Store> ProductLedger<S> {
    /// Apply a stock delta (negative = reservation, positive = release).
    ///
    /// Fails `NotFound` when the product is absent and `InsufficientStock`
    /// when the delta would leave stock negative.
    pub fn adjust_stock(&self, product_id: ProductId, delta: i64) -> DomainResult<Product> {
        let product = self.store.transact(|t| t.adjust_stock(product_id, delta))?;
        tracing::debug!(%product_id, delta, stock = product.stock(), "stock adjusted");
        Ok(product)
    }

    /// Delete a product, refusing while order items still reference it.
    pub fn delete(&self, product_id: ProductId) -> DomainResult<()> {
        self.store.transact(|t| {
            if t.product(product_id).is_none() {
                return Err(DomainError::not_found("product"));
            }
            if t.product_in_use(product_id) {
                return Err(DomainError::conflict(
                    "product is referenced by existing order items and cannot be deleted",
                ));
            }
            t.remove_product(product_id);
            Ok(())
        })?;
        tracing::info!(%product_id, "product deleted");
        Ok(())
    }
}
