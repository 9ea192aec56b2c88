//! Application services composing repositories and the matching engine.

pub mod fulfillment;

pub use fulfillment::{OrderFulfillment, OrderSummary, RankedCandidate, build_order_board};
