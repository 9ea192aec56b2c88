//! Mock geocoder and in-memory geo-point store for examples and testing.
//!
//! These implement the same seams as the production Yandex client and the
//! Postgres repository, so the matching engine can be exercised without
//! network or database access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use hotplate_core::{Coordinates, GeoPoint};

use crate::db::RepositoryError;
use crate::geo::{GeoPointStore, GeocodeError, Geocoder, ResolvedAddress};

/// Scripted provider answer for one address.
#[derive(Debug, Clone)]
enum Scripted {
    Match(ResolvedAddress),
    NoMatch,
    Failure,
}

/// A scripted [`Geocoder`] that counts provider calls.
///
/// Addresses without a script resolve to "no match". Clones share the
/// scripts and the call counter, so a test can keep its own handle for
/// assertions while the cache owns another.
#[derive(Clone, Default)]
pub struct MockGeocoder {
    scripts: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<AtomicUsize>,
}

impl MockGeocoder {
    /// Create a mock with no scripted addresses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful match for `address`.
    #[must_use]
    pub fn with_match(
        self,
        address: &str,
        normalized_address: &str,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        self.script(
            address,
            Scripted::Match(ResolvedAddress {
                normalized_address: normalized_address.to_string(),
                coordinates: Coordinates::new(latitude, longitude),
            }),
        );
        self
    }

    /// Script a definitive "no match" answer for `address`.
    #[must_use]
    pub fn with_no_match(self, address: &str) -> Self {
        self.script(address, Scripted::NoMatch);
        self
    }

    /// Script a transport-level failure for `address`.
    #[must_use]
    pub fn with_failure(self, address: &str) -> Self {
        self.script(address, Scripted::Failure);
        self
    }

    /// How many times `geocode` has been called, across all clones.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn script(&self, address: &str, scripted: Scripted) {
        self.scripts
            .lock()
            .expect("mock scripts lock poisoned")
            .insert(address.to_string(), scripted);
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<ResolvedAddress>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self
            .scripts
            .lock()
            .expect("mock scripts lock poisoned")
            .get(address)
            .cloned();
        match scripted {
            Some(Scripted::Match(resolved)) => Ok(Some(resolved)),
            Some(Scripted::Failure) => Err(GeocodeError::Status(502)),
            Some(Scripted::NoMatch) | None => Ok(None),
        }
    }
}

/// A [`GeoPointStore`] backed by a `HashMap`, for tests and examples.
#[derive(Clone, Default)]
pub struct InMemoryGeoPointStore {
    points: Arc<Mutex<HashMap<String, GeoPoint>>>,
}

impl InMemoryGeoPointStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a stored point directly, bypassing the resolver.
    #[must_use]
    pub fn get(&self, address: &str) -> Option<GeoPoint> {
        self.points
            .lock()
            .expect("mock points lock poisoned")
            .get(address)
            .cloned()
    }

    /// Seed a point, e.g. an already-calculated cache entry.
    pub fn insert(&self, point: GeoPoint) {
        self.points
            .lock()
            .expect("mock points lock poisoned")
            .insert(point.address.clone(), point);
    }

    /// Number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.lock().expect("mock points lock poisoned").len()
    }

    /// Whether the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl GeoPointStore for InMemoryGeoPointStore {
    async fn get_by_address(&self, address: &str) -> Result<Option<GeoPoint>, RepositoryError> {
        Ok(self.get(address))
    }

    async fn upsert(&self, point: &GeoPoint) -> Result<(), RepositoryError> {
        self.insert(point.clone());
        Ok(())
    }
}
