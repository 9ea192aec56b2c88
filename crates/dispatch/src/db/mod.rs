//! Database operations for the dispatch `PostgreSQL`.
//!
//! # Tables
//!
//! - `restaurants` - restaurants with free-text addresses
//! - `categories` / `products` - the product catalog
//! - `menu_entries` - per-restaurant product availability, unique per
//!   (restaurant, product) pair
//! - `orders` / `order_items` - customer orders with snapshotted prices
//! - `geo_points` - cached geocoding results keyed by raw address
//!
//! Queries use the runtime sqlx API (`query_as` over `FromRow` rows) so the
//! workspace builds without a live database.

pub mod catalog;
pub mod geo;
pub mod orders;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use geo::PgGeoPointStore;
pub use orders::OrderRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate menu entry).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
