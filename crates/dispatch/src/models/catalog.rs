//! Restaurants, products, and per-restaurant menu availability.

use rust_decimal::Decimal;
use serde::Serialize;

use hotplate_core::{CategoryId, ProductId, RestaurantId};

/// A restaurant that can be assigned orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// Free-text address; the geo cache keys on this exact string.
    pub address: String,
    pub contact_phone: Option<String>,
}

/// A product category, e.g. "Пицца".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
}

/// A sellable product, independent of any restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Option<ProductCategory>,
    /// Current list price; order items snapshot their own price.
    pub price: Decimal,
    pub special: bool,
    pub description: Option<String>,
}

/// One (restaurant, product) menu pair; unique per pair.
///
/// A restaurant can supply a product iff an entry for the pair exists with
/// `availability = true`. Absence of an entry means unsupplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub restaurant_id: RestaurantId,
    pub product_id: ProductId,
    pub availability: bool,
}

/// An in-memory snapshot of the catalog, queried by the matcher.
///
/// Restaurants keep the store's name ordering; the matcher adds no ordering
/// of its own.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub products: Vec<Product>,
    pub menu: Vec<MenuEntry>,
}

impl Catalog {
    /// Whether `restaurant_id` currently offers `product_id`.
    #[must_use]
    pub fn is_available(&self, restaurant_id: RestaurantId, product_id: ProductId) -> bool {
        self.menu.iter().any(|entry| {
            entry.restaurant_id == restaurant_id
                && entry.product_id == product_id
                && entry.availability
        })
    }

    /// Per-restaurant availability flags for one product, in restaurant
    /// order. Restaurants without a menu entry get `false`.
    #[must_use]
    pub fn availability_row(&self, product_id: ProductId) -> Vec<bool> {
        self.restaurants
            .iter()
            .map(|restaurant| self.is_available(restaurant.id, product_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: i32, name: &str) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(id),
            name: name.to_string(),
            address: format!("{name} street"),
            contact_phone: None,
        }
    }

    #[test]
    fn test_missing_menu_entry_means_unavailable() {
        let catalog = Catalog {
            restaurants: vec![restaurant(1, "R1")],
            products: Vec::new(),
            menu: Vec::new(),
        };
        assert!(!catalog.is_available(RestaurantId::new(1), ProductId::new(10)));
    }

    #[test]
    fn test_availability_row_follows_restaurant_order() {
        let catalog = Catalog {
            restaurants: vec![restaurant(1, "A"), restaurant(2, "B"), restaurant(3, "C")],
            products: Vec::new(),
            menu: vec![
                MenuEntry {
                    restaurant_id: RestaurantId::new(2),
                    product_id: ProductId::new(10),
                    availability: true,
                },
                MenuEntry {
                    restaurant_id: RestaurantId::new(3),
                    product_id: ProductId::new(10),
                    availability: false,
                },
            ],
        };
        assert_eq!(
            catalog.availability_row(ProductId::new(10)),
            vec![false, true, false]
        );
    }
}
