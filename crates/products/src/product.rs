use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, ProductId};

/// Maximum length for product names (same bound as customer names).
pub const MAX_NAME_LEN: usize = 100;

/// A sellable product with a finite stock of units.
///
/// `stock` is the single source of inventory truth: it only changes through
/// [`Product::adjust_stock`] (reservation/restoration) or a validated direct
/// edit, and it never goes negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    stock: i64,
}

impl Product {
    /// Materialize a product from validated parts. Callers are expected to
    /// have run [`NewProduct::validate`] first; the store does this on insert.
    pub fn from_parts(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
            stock: new.stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Apply a stock delta (negative = reservation, positive = release).
    ///
    /// Fails with `InsufficientStock` when the delta would leave the stock
    /// negative; the product is untouched in that case.
    pub fn adjust_stock(&mut self, delta: i64) -> DomainResult<()> {
        let adjusted = self.stock + delta;
        if adjusted < 0 {
            return Err(DomainError::insufficient_stock(-delta, self.stock));
        }
        self.stock = adjusted;
        Ok(())
    }

    /// Overwrite name/price/stock from a validated update, keeping identity.
    pub fn overwrite(&mut self, new: NewProduct) {
        self.name = new.name;
        self.price = new.price;
        self.stock = new.stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated input for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl NewProduct {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation(
                "price must be a non-negative number",
            ));
        }
        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        Ok(())
    }
}
