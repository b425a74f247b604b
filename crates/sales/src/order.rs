use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, OrderId};

/// Maximum length for customer names.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;

/// Order lifecycle status (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// A customer order. Owns its order items: deleting the order removes them
/// at the storage layer. The order itself holds no stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    ordered_at: DateTime<Utc>,
    status: OrderStatus,
}

impl Order {
    /// Materialize an order from validated parts. `ordered_at` defaults to
    /// now and `status` to `Pending` when the input leaves them unset.
    pub fn from_parts(id: OrderId, new: NewOrder) -> Self {
        Self {
            id,
            customer_name: new.customer_name,
            ordered_at: new.ordered_at.unwrap_or_else(Utc::now),
            status: new.status.unwrap_or(OrderStatus::Pending),
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn ordered_at(&self) -> DateTime<Utc> {
        self.ordered_at
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Overwrite customer name, timestamp and status, keeping identity.
    pub fn overwrite(&mut self, new: NewOrder) {
        self.customer_name = new.customer_name;
        if let Some(at) = new.ordered_at {
            self.ordered_at = at;
        }
        if let Some(status) = new.status {
            self.status = status;
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated input for creating or replacing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub ordered_at: Option<DateTime<Utc>>,
    pub status: Option<OrderStatus>,
}

impl NewOrder {
    pub fn validate(&self) -> DomainResult<()> {
        if self.customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer_name cannot be empty"));
        }
        if self.customer_name.chars().count() > MAX_CUSTOMER_NAME_LEN {
            return Err(DomainError::validation(format!(
                "customer_name cannot exceed {MAX_CUSTOMER_NAME_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_order(name: &str) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            ordered_at: None,
            status: None,
        }
    }

    #[test]
    fn defaults_to_pending_with_a_timestamp() {
        let order = Order::from_parts(OrderId::new(1), new_order("Ada"));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.customer_name(), "Ada");
    }

    #[test]
    fn validate_rejects_blank_customer_name() {
        match new_order("  ").validate().unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_overlong_customer_name() {
        assert!(new_order(&"x".repeat(MAX_CUSTOMER_NAME_LEN + 1))
            .validate()
            .is_err());
    }

    #[test]
    fn status_serializes_in_wire_casing() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");

        let status: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn overwrite_keeps_identity_and_unset_fields() {
        let mut order = Order::from_parts(OrderId::new(7), new_order("Ada"));
        let ordered_at = order.ordered_at();

        order.overwrite(NewOrder {
            customer_name: "Grace".to_string(),
            ordered_at: None,
            status: Some(OrderStatus::Paid),
        });

        assert_eq!(order.id(), &OrderId::new(7));
        assert_eq!(order.customer_name(), "Grace");
        assert_eq!(order.ordered_at(), ordered_at);
        assert_eq!(order.status(), OrderStatus::Paid);
    }
}
