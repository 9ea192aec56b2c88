//! Catalog repository: restaurants, products, and menu availability.

use rust_decimal::Decimal;
use sqlx::PgPool;

use hotplate_core::{CategoryId, ProductId, RestaurantId};

use super::RepositoryError;
use crate::models::{Catalog, MenuEntry, Product, ProductCategory, Restaurant};

/// Repository for catalog reads.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i32,
    name: String,
    address: String,
    contact_phone: Option<String>,
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    category_id: Option<i32>,
    category_name: Option<String>,
    price: Decimal,
    special: bool,
    description: Option<String>,
}

#[derive(sqlx::FromRow)]
struct MenuEntryRow {
    restaurant_id: i32,
    product_id: i32,
    availability: bool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the whole catalog snapshot: restaurants ordered by name, all
    /// products with their categories, and every menu entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn fetch(&self) -> Result<Catalog, RepositoryError> {
        let restaurants = sqlx::query_as::<_, RestaurantRow>(
            "SELECT id, name, address, contact_phone
             FROM restaurants
             ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(|row| Restaurant {
            id: RestaurantId::new(row.id),
            name: row.name,
            address: row.address,
            contact_phone: row.contact_phone,
        })
        .collect();

        let products = sqlx::query_as::<_, ProductRow>(
            "SELECT p.id, p.name, p.category_id, c.name AS category_name,
                    p.price, p.special, p.description
             FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             ORDER BY p.name",
        )
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(|row| Product {
            id: ProductId::new(row.id),
            name: row.name,
            category: row.category_id.zip(row.category_name).map(|(id, name)| {
                ProductCategory {
                    id: CategoryId::new(id),
                    name,
                }
            }),
            price: row.price,
            special: row.special,
            description: row.description,
        })
        .collect();

        let menu = sqlx::query_as::<_, MenuEntryRow>(
            "SELECT restaurant_id, product_id, availability
             FROM menu_entries",
        )
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(|row| MenuEntry {
            restaurant_id: RestaurantId::new(row.restaurant_id),
            product_id: ProductId::new(row.product_id),
            availability: row.availability,
        })
        .collect();

        Ok(Catalog {
            restaurants,
            products,
            menu,
        })
    }
}
