//! Integration tests for Hotplate.
//!
//! These tests drive the order-fulfillment engine through the public
//! library API of `hotplate-dispatch`, with the scripted geocoder and the
//! in-memory geo-point store from `hotplate_dispatch::mocks` standing in
//! for the Yandex provider and Postgres. No network or database required.
//!
//! # Test Categories
//!
//! - `order_board` - Matching, ranking, and orchestration scenarios
//! - `geo_cache` - Resolution caching and failure-recovery properties
