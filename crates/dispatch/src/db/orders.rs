//! Order repository: active orders with their line items.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use hotplate_core::{OrderId, OrderStatus, PaymentMethod, ProductId, RestaurantId};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

/// Repository for order reads.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    firstname: String,
    lastname: String,
    phonenumber: String,
    address: String,
    status: String,
    comment: String,
    registered_at: DateTime<Utc>,
    called_at: Option<DateTime<Utc>>,
    delivered_at: Option<DateTime<Utc>>,
    payment: String,
    provider_id: Option<i32>,
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    order_id: i32,
    product_id: i32,
    price: Decimal,
    quantity: i32,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all active orders (status New, Preparing, or Delivering) with
    /// their line items, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails and
    /// `RepositoryError::DataCorruption` if a stored enum value or quantity
    /// is invalid.
    pub async fn active_with_items(&self) -> Result<Vec<Order>, RepositoryError> {
        let order_rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, firstname, lastname, phonenumber, address, status,
                    comment, registered_at, called_at, delivered_at, payment,
                    provider_id
             FROM orders
             WHERE status IN ('new', 'preparing', 'delivering')
             ORDER BY registered_at",
        )
        .fetch_all(self.pool)
        .await?;

        let order_ids: Vec<i32> = order_rows.iter().map(|row| row.id).collect();
        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT order_id, product_id, price, quantity
             FROM order_items
             WHERE order_id = ANY($1)
             ORDER BY id",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut items_by_order: HashMap<i32, Vec<OrderItem>> = HashMap::new();
        for row in item_rows {
            let quantity = u32::try_from(row.quantity).map_err(|_| {
                RepositoryError::DataCorruption(format!(
                    "negative quantity {} on order {}",
                    row.quantity, row.order_id
                ))
            })?;
            items_by_order.entry(row.order_id).or_default().push(OrderItem {
                product_id: ProductId::new(row.product_id),
                price: row.price,
                quantity,
            });
        }

        order_rows
            .into_iter()
            .map(|row| {
                let status = row.status.parse::<OrderStatus>().map_err(|e| {
                    RepositoryError::DataCorruption(format!("order {}: {e}", row.id))
                })?;
                let payment = row.payment.parse::<PaymentMethod>().map_err(|e| {
                    RepositoryError::DataCorruption(format!("order {}: {e}", row.id))
                })?;

                Ok(Order {
                    id: OrderId::new(row.id),
                    firstname: row.firstname,
                    lastname: row.lastname,
                    phonenumber: row.phonenumber,
                    address: row.address,
                    status,
                    comment: row.comment,
                    registered_at: row.registered_at,
                    called_at: row.called_at,
                    delivered_at: row.delivered_at,
                    payment,
                    provider: row.provider_id.map(RestaurantId::new),
                    items: items_by_order.remove(&row.id).unwrap_or_default(),
                })
            })
            .collect()
    }
}
