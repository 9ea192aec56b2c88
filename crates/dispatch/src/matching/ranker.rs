//! Distance ranking of matched restaurants.

use std::cmp::Ordering;

use serde::Serialize;

use hotplate_core::NO_DATA;

use crate::db::RepositoryError;
use crate::geo::GeoCache;
use crate::models::Restaurant;

/// A candidate restaurant with its distance to the delivery address, if it
/// could be resolved.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRestaurant {
    pub restaurant: Restaurant,
    /// Great-circle distance in kilometers; `None` when either endpoint
    /// failed to geocode.
    pub distance_km: Option<f64>,
}

impl RankedRestaurant {
    /// Display label: `"3.42 км."` for resolved distances, the no-data
    /// sentinel otherwise. Formatting happens only here, at the presentation
    /// boundary; ordering uses the numeric value.
    #[must_use]
    pub fn distance_label(&self) -> String {
        self.distance_km
            .map_or_else(|| NO_DATA.to_string(), |km| format!("{km:.2} км."))
    }
}

/// Rank candidates by ascending distance from the order's delivery address.
///
/// The order address is resolved once; when it yields no coordinates, every
/// candidate is labeled unknown and kept in its original enumeration order,
/// with no per-restaurant lookups at all. Otherwise each candidate is
/// resolved through the shared geo cache; a candidate that fails to geocode
/// gets the unknown sentinel and never aborts ranking of the others.
///
/// The sort is stable on the composite key (unknown-last, then numeric
/// distance ascending), so unknown entries preserve their relative candidate
/// order among themselves.
///
/// # Errors
///
/// Returns [`RepositoryError`] only when the geo cache's backing store
/// fails; provider failures are absorbed into unknown distances.
pub async fn rank(
    geo: &GeoCache,
    order_address: &str,
    candidates: Vec<&Restaurant>,
) -> Result<Vec<RankedRestaurant>, RepositoryError> {
    let order_point = geo.resolve(order_address).await?;

    let Some(order_coords) = order_point.coordinates() else {
        return Ok(candidates
            .into_iter()
            .map(|restaurant| RankedRestaurant {
                restaurant: restaurant.clone(),
                distance_km: None,
            })
            .collect());
    };

    let mut ranked = Vec::with_capacity(candidates.len());
    for restaurant in candidates {
        let distance_km = geo
            .resolve(&restaurant.address)
            .await?
            .coordinates()
            .map(|coords| order_coords.distance_km(coords));
        ranked.push(RankedRestaurant {
            restaurant: restaurant.clone(),
            distance_km,
        });
    }

    ranked.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Ok(ranked)
}
