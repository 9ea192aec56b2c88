//! Persistent, provider-failure-tolerant address resolution.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use moka::future::Cache;
use tracing::debug;

use hotplate_core::{GeoPoint, NO_DATA};

use crate::db::RepositoryError;
use crate::geo::provider::{GeocodeError, Geocoder};

/// How long an already-calculated point may be served from the in-process
/// memo before re-reading the store.
const MEMO_TTL: Duration = Duration::from_secs(300); // 5 minutes
const MEMO_CAPACITY: u64 = 10_000;

/// Default deadline for a single provider call.
const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Persistence seam for [`GeoPoint`] records.
///
/// Implemented by the Postgres repository and by the in-memory store in
/// [`crate::mocks`].
#[async_trait]
pub trait GeoPointStore: Send + Sync {
    /// Look up a point by its exact raw address string.
    async fn get_by_address(&self, address: &str) -> Result<Option<GeoPoint>, RepositoryError>;

    /// Create or update the point keyed by `point.address`.
    async fn upsert(&self, point: &GeoPoint) -> Result<(), RepositoryError>;
}

/// Address-to-coordinates resolver backed by a persistent cache.
///
/// Resolution is idempotent in result: once a point is `calculated`,
/// repeated calls are pure reads and make no provider call. A transport
/// failure leaves the point uncalculated so the next lookup retries; a
/// definitive "no match" answer marks the point calculated-but-unknown and
/// is not retried.
#[derive(Clone)]
pub struct GeoCache {
    store: Arc<dyn GeoPointStore>,
    geocoder: Arc<dyn Geocoder>,
    /// Short-lived memo for calculated points only; uncalculated points must
    /// stay retryable on every lookup.
    memo: Cache<String, GeoPoint>,
    provider_timeout: Duration,
}

impl GeoCache {
    /// Create a resolver over the given store and provider.
    #[must_use]
    pub fn new(store: Arc<dyn GeoPointStore>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            store,
            geocoder,
            memo: Cache::builder()
                .max_capacity(MEMO_CAPACITY)
                .time_to_live(MEMO_TTL)
                .build(),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// Override the per-call provider deadline.
    #[must_use]
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    /// Resolve an address to a [`GeoPoint`], creating or updating the cached
    /// record as a side effect.
    ///
    /// Provider failures never surface here; callers observe them only as
    /// `calculated = false` with absent coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] only when the backing store itself fails.
    pub async fn resolve(&self, address: &str) -> Result<GeoPoint, RepositoryError> {
        if let Some(point) = self.memo.get(address).await {
            debug!(%address, "memo hit");
            return Ok(point);
        }

        let mut point = match self.store.get_by_address(address).await? {
            Some(existing) => existing,
            None => GeoPoint::unresolved(address, Utc::now()),
        };

        if point.calculated {
            self.memo.insert(point.address.clone(), point.clone()).await;
            return Ok(point);
        }

        // Every resolution attempt stamps the timestamp, success or not.
        point.resolved_at = Utc::now();

        let outcome = tokio::time::timeout(self.provider_timeout, self.geocoder.geocode(address))
            .await
            .unwrap_or(Err(GeocodeError::Timeout));

        match outcome {
            Ok(Some(resolved)) => {
                point.normalized_address = resolved.normalized_address;
                point.latitude = Some(resolved.coordinates.latitude);
                point.longitude = Some(resolved.coordinates.longitude);
                point.calculated = true;
            }
            Ok(None) => {
                // Definitive answer: the address has no coordinates. Marking
                // it calculated stops the board from re-querying it forever.
                point.normalized_address = NO_DATA.to_string();
                point.latitude = None;
                point.longitude = None;
                point.calculated = true;
            }
            Err(error) => {
                tracing::warn!(%address, %error, "geocoding failed, will retry on next lookup");
                point.normalized_address = NO_DATA.to_string();
                point.latitude = None;
                point.longitude = None;
                point.calculated = false;
            }
        }

        self.store.upsert(&point).await?;
        if point.calculated {
            self.memo.insert(point.address.clone(), point.clone()).await;
        }

        Ok(point)
    }
}
