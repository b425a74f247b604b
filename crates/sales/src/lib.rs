//! Sales domain module: orders and the items they own.
//!
//! This crate contains business rules for orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod order;
pub mod order_item;

pub use order::{NewOrder, Order, OrderStatus};
pub use order_item::{NewOrderItem, OrderItem};
