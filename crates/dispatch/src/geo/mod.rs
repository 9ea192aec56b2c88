//! Address resolution: geocoding provider client and persistent geo cache.
//!
//! # Architecture
//!
//! - [`Geocoder`] is the capability boundary to the external provider; the
//!   concrete implementation is the Yandex HTTP geocoder, authenticated by an
//!   API key injected through configuration.
//! - [`GeoCache`] memoizes resolved addresses as [`hotplate_core::GeoPoint`]
//!   records through a [`GeoPointStore`], so an address is geocoded at most
//!   once after a definitive provider answer and provider failures degrade to
//!   "unknown coordinates" instead of errors.
//!
//! Callers never see provider errors; they observe only `calculated` and
//! nullable coordinates on the returned point.

mod cache;
mod provider;

pub use cache::{GeoCache, GeoPointStore};
pub use provider::{GeocodeError, Geocoder, ResolvedAddress, YandexGeocoder};
