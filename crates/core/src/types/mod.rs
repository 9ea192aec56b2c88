//! Core types for Hotplate.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod geo;
pub mod id;
pub mod status;

pub use geo::{Coordinates, GeoPoint, NO_DATA};
pub use id::*;
pub use status::*;
