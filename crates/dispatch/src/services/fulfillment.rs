//! The order board: per-order restaurant matching and distance ranking.

use rust_decimal::Decimal;
use serde::Serialize;

use hotplate_core::{OrderId, OrderStatus, PaymentMethod, RestaurantId};

use crate::db::RepositoryError;
use crate::geo::GeoCache;
use crate::matching::{RankedRestaurant, rank, suitable_restaurants};
use crate::models::{Catalog, Order};

/// Order fields the staff board shows.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    pub status: OrderStatus,
    pub payment: PaymentMethod,
    pub comment: String,
    pub cost: Decimal,
    pub provider: Option<RestaurantId>,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            firstname: order.firstname.clone(),
            lastname: order.lastname.clone(),
            phonenumber: order.phonenumber.clone(),
            address: order.address.clone(),
            status: order.status,
            payment: order.payment,
            comment: order.comment.clone(),
            cost: order.cost(),
            provider: order.provider,
        }
    }
}

/// One ranked candidate as handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub id: RestaurantId,
    pub name: String,
    /// `"3.42 км."` or the no-data sentinel.
    pub distance: String,
}

impl From<RankedRestaurant> for RankedCandidate {
    fn from(ranked: RankedRestaurant) -> Self {
        let distance = ranked.distance_label();
        Self {
            id: ranked.restaurant.id,
            name: ranked.restaurant.name,
            distance,
        }
    }
}

/// An active order paired with its ranked candidate restaurants.
#[derive(Debug, Clone, Serialize)]
pub struct OrderFulfillment {
    pub order: OrderSummary,
    pub restaurants: Vec<RankedCandidate>,
}

/// Build the staff order board, one entry per active order in the given
/// enumeration order.
///
/// Orders with an assigned provider get an empty candidate list - matching
/// and ranking are bypassed. For the rest, the matcher selects candidates
/// from the catalog and the ranker orders them by distance through the
/// shared geo cache.
///
/// # Errors
///
/// Returns [`RepositoryError`] only when the geo cache's backing store
/// fails; geocoding failures degrade to unknown-distance labels.
pub async fn build_order_board(
    geo: &GeoCache,
    catalog: &Catalog,
    orders: &[Order],
) -> Result<Vec<OrderFulfillment>, RepositoryError> {
    let mut board = Vec::with_capacity(orders.len());

    for order in orders {
        let restaurants = if order.provider.is_some() {
            Vec::new()
        } else {
            let candidates = suitable_restaurants(catalog, order);
            rank(geo, &order.address, candidates)
                .await?
                .into_iter()
                .map(RankedCandidate::from)
                .collect()
        };

        board.push(OrderFulfillment {
            order: OrderSummary::from(order),
            restaurants,
        });
    }

    Ok(board)
}
