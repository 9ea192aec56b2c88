//! Hotplate Dispatch library.
//!
//! The staff order-management console backend: matches active orders to the
//! restaurants that can cook them and ranks those restaurants by distance to
//! the delivery address, resolving addresses through a persistently cached
//! geocoding provider.
//!
//! The binary in `main.rs` wires this library to Postgres, the Yandex
//! geocoder, and an axum server; the [`mocks`] module provides in-memory
//! stand-ins for both external collaborators so the engine can be tested
//! end-to-end without I/O.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod geo;
pub mod matching;
pub mod mocks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
