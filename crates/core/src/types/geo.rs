//! Geographic coordinates and cached geocoding results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, as used by the great-circle formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Normalized-address sentinel stored when the geocoding provider could not
/// produce a match for an address. Also used by the presentation layer as the
/// unknown-distance label.
pub const NO_DATA: &str = "нет данных";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle (haversine) distance to another point, in kilometers.
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        let lat_a = self.latitude.to_radians();
        let lat_b = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let half_chord = (delta_lat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

        2.0 * half_chord.sqrt().asin() * EARTH_RADIUS_KM
    }
}

/// A cached geocoding result, keyed uniquely by the raw address string.
///
/// Created lazily the first time an address is looked up and never deleted.
/// `calculated` is the retry gate: a point stays `calculated = false` after a
/// transport-level provider failure and is re-resolved on the next lookup,
/// while a provider answer (including "no match") marks the point calculated
/// so the address is not retried indefinitely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Raw address string, exactly as entered on the restaurant or order.
    pub address: String,
    /// Provider-normalized address, or [`NO_DATA`] when resolution failed.
    pub normalized_address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// True once a provider call completed without a transport error.
    pub calculated: bool,
    /// When the last resolution attempt happened.
    pub resolved_at: DateTime<Utc>,
}

impl GeoPoint {
    /// A fresh, never-resolved point for an address.
    #[must_use]
    pub fn unresolved(address: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            address: address.into(),
            normalized_address: String::new(),
            latitude: None,
            longitude: None,
            calculated: false,
            resolved_at: now,
        }
    }

    /// The resolved coordinates, if resolution succeeded.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.calculated, self.latitude, self.longitude) {
            (true, Some(latitude), Some(longitude)) => {
                Some(Coordinates::new(latitude, longitude))
            }
            _ => None,
        }
    }
}
