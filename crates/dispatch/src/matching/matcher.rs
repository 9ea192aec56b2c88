//! Restaurant matching against an order's product set.

use crate::models::{Catalog, Order, Restaurant};

/// Restaurants whose current menu availability covers every distinct
/// product in the order.
///
/// A restaurant qualifies iff the number of its available menu entries that
/// hit the order's product set equals the number of distinct ordered
/// products. Extra products on the menu don't matter; one missing product
/// disqualifies. An order with zero items matches every restaurant - that is
/// defined behavior, not an error.
///
/// No ordering is guaranteed beyond the catalog's restaurant order; ranking
/// is the [`crate::matching::ranker`]'s job.
#[must_use]
pub fn suitable_restaurants<'a>(catalog: &'a Catalog, order: &Order) -> Vec<&'a Restaurant> {
    let wanted = order.distinct_products();

    catalog
        .restaurants
        .iter()
        .filter(|restaurant| {
            let covered = catalog
                .menu
                .iter()
                .filter(|entry| {
                    entry.restaurant_id == restaurant.id
                        && entry.availability
                        && wanted.contains(&entry.product_id)
                })
                .count();
            covered == wanted.len()
        })
        .collect()
}
