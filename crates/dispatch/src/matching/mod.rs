//! The order-fulfillment matching and distance-ranking engine.
//!
//! [`matcher`] answers "which restaurants can cook this order" from the
//! catalog snapshot; [`ranker`] orders those candidates by great-circle
//! distance to the delivery address, degrading to an unknown-distance
//! sentinel whenever coordinates cannot be resolved.

pub mod matcher;
pub mod ranker;

pub use matcher::suitable_restaurants;
pub use ranker::{RankedRestaurant, rank};
