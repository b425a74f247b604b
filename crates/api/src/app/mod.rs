//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store + ledger + reconciler wiring and per-entity operations
//! - `routes/`: HTTP routes + handlers (one file per entity area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());
    routes::router().layer(Extension(services))
}
