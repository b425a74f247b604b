//! Infrastructure layer: the injected storage seam and the components that
//! coordinate multi-entity writes on top of it.

pub mod ledger;
pub mod memory;
pub mod reconciler;
pub mod store;
pub mod tables;


pub use ledger::ProductLedger;
pub use memory::MemoryStore;
pub use reconciler::OrderItemReconciler;
pub use store::{Page, Store};
pub use tables::Tables;
