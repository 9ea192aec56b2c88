//! HTTP route handlers for the staff console.
//!
//! # Route Structure
//!
//! ```text
//! GET /health           - Liveness check
//! GET /health/ready     - Readiness check (pings the database)
//!
//! # Console API
//! GET /api/orders       - Active orders with matched restaurants ranked by distance
//! GET /api/restaurants  - Restaurants ordered by name
//! GET /api/products     - Per-product availability matrix across restaurants
//! ```
//!
//! All console endpoints return JSON; rendering is the front-end's concern.

pub mod catalog;
pub mod orders;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the console API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(orders::order_board))
        .route("/api/restaurants", get(catalog::restaurants))
        .route("/api/products", get(catalog::products))
}
