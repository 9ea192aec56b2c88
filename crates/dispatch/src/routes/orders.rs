//! Order board route handler.

use axum::{Json, extract::State};

use crate::db::{CatalogRepository, OrderRepository};
use crate::error::Result;
use crate::services::{OrderFulfillment, build_order_board};
use crate::state::AppState;

/// Active orders, each with its suitable restaurants ranked by distance.
///
/// Orders that already have an assigned provider come back with an empty
/// restaurant list. Geocoding failures show up as unknown-distance labels,
/// never as an error response.
pub async fn order_board(State(state): State<AppState>) -> Result<Json<Vec<OrderFulfillment>>> {
    let catalog = CatalogRepository::new(state.pool()).fetch().await?;
    let orders = OrderRepository::new(state.pool()).active_with_items().await?;

    let board = build_order_board(state.geo(), &catalog, &orders).await?;
    Ok(Json(board))
}
