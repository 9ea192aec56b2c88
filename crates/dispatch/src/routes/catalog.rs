//! Restaurant and product catalog route handlers.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::Serialize;

use hotplate_core::{ProductId, RestaurantId};

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::models::{Catalog, Product};
use crate::state::AppState;

/// Restaurant fields the console shows.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantView {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub contact_phone: Option<String>,
}

/// One product with its availability per restaurant.
#[derive(Debug, Clone, Serialize)]
pub struct ProductAvailability {
    pub id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub special: bool,
    /// Flags in the same order as the matrix's `restaurants` list; `false`
    /// for restaurants without a menu entry.
    pub availability: Vec<bool>,
}

/// The full availability matrix: products × restaurants.
#[derive(Debug, Clone, Serialize)]
pub struct ProductMatrix {
    pub restaurants: Vec<RestaurantView>,
    pub products: Vec<ProductAvailability>,
}

/// Restaurants ordered by name.
pub async fn restaurants(State(state): State<AppState>) -> Result<Json<Vec<RestaurantView>>> {
    let catalog = CatalogRepository::new(state.pool()).fetch().await?;
    Ok(Json(restaurant_views(&catalog)))
}

/// Per-product availability across all restaurants.
pub async fn products(State(state): State<AppState>) -> Result<Json<ProductMatrix>> {
    let catalog = CatalogRepository::new(state.pool()).fetch().await?;

    let products = catalog
        .products
        .iter()
        .map(|product| product_availability(&catalog, product))
        .collect();

    Ok(Json(ProductMatrix {
        restaurants: restaurant_views(&catalog),
        products,
    }))
}

fn restaurant_views(catalog: &Catalog) -> Vec<RestaurantView> {
    catalog
        .restaurants
        .iter()
        .map(|restaurant| RestaurantView {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            contact_phone: restaurant.contact_phone.clone(),
        })
        .collect()
}

fn product_availability(catalog: &Catalog, product: &Product) -> ProductAvailability {
    ProductAvailability {
        id: product.id,
        name: product.name.clone(),
        category: product.category.as_ref().map(|c| c.name.clone()),
        price: product.price,
        special: product.special,
        availability: catalog.availability_row(product.id),
    }
}

#[cfg(test)]
mod tests {
    use hotplate_core::CategoryId;

    use super::*;
    use crate::models::{MenuEntry, ProductCategory, Restaurant};

    #[test]
    fn test_matrix_rows_align_with_restaurant_order() {
        let catalog = Catalog {
            restaurants: vec![
                Restaurant {
                    id: RestaurantId::new(1),
                    name: "Аврора".to_string(),
                    address: "a".to_string(),
                    contact_phone: None,
                },
                Restaurant {
                    id: RestaurantId::new(2),
                    name: "Бриз".to_string(),
                    address: "b".to_string(),
                    contact_phone: None,
                },
            ],
            products: vec![Product {
                id: ProductId::new(10),
                name: "Пицца".to_string(),
                category: Some(ProductCategory {
                    id: CategoryId::new(1),
                    name: "Горячее".to_string(),
                }),
                price: Decimal::new(45000, 2),
                special: false,
                description: None,
            }],
            menu: vec![MenuEntry {
                restaurant_id: RestaurantId::new(2),
                product_id: ProductId::new(10),
                availability: true,
            }],
        };

        let product = catalog.products.first().expect("one product");
        let row = product_availability(&catalog, product);
        assert_eq!(row.availability, vec![false, true]);
        assert_eq!(row.category.as_deref(), Some("Горячее"));
    }
}
