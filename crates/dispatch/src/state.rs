//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::DispatchConfig;
use crate::db::PgGeoPointStore;
use crate::geo::{GeoCache, YandexGeocoder};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DispatchConfig,
    pool: PgPool,
    geo: GeoCache,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Wires the geo cache over the Postgres store and the Yandex geocoder
    /// configured in `config`.
    #[must_use]
    pub fn new(config: DispatchConfig, pool: PgPool) -> Self {
        let geocoder = YandexGeocoder::new(&config.geocoder);
        let geo = GeoCache::new(
            Arc::new(PgGeoPointStore::new(pool.clone())),
            Arc::new(geocoder),
        )
        .with_provider_timeout(config.geocoder.timeout);

        Self {
            inner: Arc::new(AppStateInner { config, pool, geo }),
        }
    }

    /// Get a reference to the dispatch configuration.
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the shared geo cache.
    #[must_use]
    pub fn geo(&self) -> &GeoCache {
        &self.inner.geo
    }
}
