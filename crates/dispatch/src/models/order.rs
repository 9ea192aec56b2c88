//! Orders and their line items.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use hotplate_core::{OrderId, OrderStatus, PaymentMethod, ProductId, RestaurantId};

/// One line of an order.
///
/// The price is snapshotted at order time and is independent of the
/// product's current list price. Quantity is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub price: Decimal,
    pub quantity: u32,
}

/// A customer order as shown on the staff board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    /// Delivery address; the geo cache keys on this exact string.
    pub address: String,
    pub status: OrderStatus,
    pub comment: String,
    pub registered_at: DateTime<Utc>,
    pub called_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub payment: PaymentMethod,
    /// Once a provider restaurant is assigned, matching and ranking for the
    /// order are bypassed.
    pub provider: Option<RestaurantId>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Total cost: Σ(item.price × item.quantity).
    #[must_use]
    pub fn cost(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }

    /// The distinct products referenced by the order's line items.
    #[must_use]
    pub fn distinct_products(&self) -> HashSet<ProductId> {
        self.items.iter().map(|item| item.product_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with_items(items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId::new(1),
            firstname: "Иван".to_string(),
            lastname: "Петров".to_string(),
            phonenumber: "+79991234567".to_string(),
            address: "Москва, Тверская 1".to_string(),
            status: OrderStatus::New,
            comment: String::new(),
            registered_at: Utc::now(),
            called_at: None,
            delivered_at: None,
            payment: PaymentMethod::Cash,
            provider: None,
            items,
        }
    }

    #[test]
    fn test_cost_sums_price_times_quantity() {
        let order = order_with_items(vec![
            OrderItem {
                product_id: ProductId::new(1),
                price: Decimal::new(25000, 2),
                quantity: 2,
            },
            OrderItem {
                product_id: ProductId::new(2),
                price: Decimal::new(9950, 2),
                quantity: 1,
            },
        ]);
        assert_eq!(order.cost(), Decimal::new(59950, 2));
    }

    #[test]
    fn test_cost_of_empty_order_is_zero() {
        assert_eq!(order_with_items(Vec::new()).cost(), Decimal::ZERO);
    }

    #[test]
    fn test_distinct_products_deduplicates_lines() {
        let order = order_with_items(vec![
            OrderItem {
                product_id: ProductId::new(1),
                price: Decimal::new(25000, 2),
                quantity: 1,
            },
            OrderItem {
                product_id: ProductId::new(1),
                price: Decimal::new(24000, 2),
                quantity: 3,
            },
        ]);
        assert_eq!(order.distinct_products().len(), 1);
    }
}
