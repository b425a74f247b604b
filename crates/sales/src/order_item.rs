use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId, OrderItemId, ProductId};

/// One line of an order: a quantity of a product at a captured unit price.
///
/// `unit_price` is the price at time of sale and does not follow later
/// product price edits. Both references must resolve whenever the item is
/// mutated; the item never outlives its order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    order_id: OrderId,
    product_id: ProductId,
    quantity: i64,
    unit_price: f64,
}

impl OrderItem {
    /// Materialize an item from validated parts. The store assigns the id.
    pub fn from_parts(id: OrderItemId, new: NewOrderItem) -> Self {
        Self {
            id,
            order_id: new.order_id,
            product_id: new.product_id,
            quantity: new.quantity,
            unit_price: new.unit_price,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Overwrite references, quantity and unit price, keeping identity.
    pub fn overwrite(&mut self, new: NewOrderItem) {
        self.order_id = new.order_id;
        self.product_id = new.product_id;
        self.quantity = new.quantity;
        self.unit_price = new.unit_price;
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated input for creating or replacing an order item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

impl NewOrderItem {
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(DomainError::validation(
                "unit_price must be a non-negative number",
            ));
        }
        Ok(())
    }
}
