//! Postgres-backed geo-point store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use hotplate_core::GeoPoint;

use super::RepositoryError;
use crate::geo::GeoPointStore;

/// [`GeoPointStore`] over the `geo_points` table.
#[derive(Clone)]
pub struct PgGeoPointStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct GeoPointRow {
    address: String,
    normalized_address: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    calculated: bool,
    resolved_at: DateTime<Utc>,
}

impl From<GeoPointRow> for GeoPoint {
    fn from(row: GeoPointRow) -> Self {
        Self {
            address: row.address,
            normalized_address: row.normalized_address,
            latitude: row.latitude,
            longitude: row.longitude,
            calculated: row.calculated,
            resolved_at: row.resolved_at,
        }
    }
}

impl PgGeoPointStore {
    /// Create a new store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GeoPointStore for PgGeoPointStore {
    async fn get_by_address(&self, address: &str) -> Result<Option<GeoPoint>, RepositoryError> {
        let row = sqlx::query_as::<_, GeoPointRow>(
            "SELECT address, normalized_address, latitude, longitude,
                    calculated, resolved_at
             FROM geo_points
             WHERE address = $1",
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GeoPoint::from))
    }

    async fn upsert(&self, point: &GeoPoint) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO geo_points
                 (address, normalized_address, latitude, longitude,
                  calculated, resolved_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (address) DO UPDATE SET
                 normalized_address = EXCLUDED.normalized_address,
                 latitude = EXCLUDED.latitude,
                 longitude = EXCLUDED.longitude,
                 calculated = EXCLUDED.calculated,
                 resolved_at = EXCLUDED.resolved_at",
        )
        .bind(&point.address)
        .bind(&point.normalized_address)
        .bind(point.latitude)
        .bind(point.longitude)
        .bind(point.calculated)
        .bind(point.resolved_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
