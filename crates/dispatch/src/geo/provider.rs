//! Geocoding provider boundary and the Yandex HTTP implementation.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use hotplate_core::Coordinates;

use crate::config::GeocoderConfig;

/// Errors that can occur when calling the geocoding provider.
///
/// These never leave the geo cache; `resolve` converts them into an
/// uncalculated point.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status.
    #[error("provider returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape.
    #[error("malformed provider response: {0}")]
    Parse(String),

    /// Provider call exceeded the configured deadline.
    #[error("provider call timed out")]
    Timeout,
}

/// An address the provider matched successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    /// The provider's canonical spelling of the address.
    pub normalized_address: String,
    pub coordinates: Coordinates,
}

/// Capability interface to an external geocoding provider.
///
/// `Ok(None)` means the provider answered but found no match for the
/// address; `Err` is a transport-level failure that is safe to retry.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<ResolvedAddress>, GeocodeError>;
}

/// Client for the Yandex HTTP geocoder.
pub struct YandexGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl YandexGeocoder {
    /// Create a new geocoder client.
    #[must_use]
    pub fn new(config: &GeocoderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for YandexGeocoder {
    #[instrument(skip(self), fields(address = %address))]
    async fn geocode(&self, address: &str) -> Result<Option<ResolvedAddress>, GeocodeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.expose_secret()),
                ("geocode", address),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "geocoder returned non-success status"
            );
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Extract the first geocoder match from a raw response body.
fn parse_response(body: &str) -> Result<Option<ResolvedAddress>, GeocodeError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| GeocodeError::Parse(e.to_string()))?;

    let Some(member) = envelope
        .response
        .collection
        .feature_member
        .into_iter()
        .next()
    else {
        return Ok(None);
    };

    let geo_object = member.geo_object;
    let coordinates = parse_pos(&geo_object.point.pos)?;

    Ok(Some(ResolvedAddress {
        normalized_address: geo_object.meta_data_property.geocoder_meta_data.text,
        coordinates,
    }))
}

/// Parse the provider's `"longitude latitude"` position string.
fn parse_pos(pos: &str) -> Result<Coordinates, GeocodeError> {
    let mut parts = pos.split_whitespace();
    let longitude = parts
        .next()
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse(format!("bad position: {pos:?}")))?;
    let latitude = parts
        .next()
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse(format!("bad position: {pos:?}")))?;
    Ok(Coordinates::new(latitude, longitude))
}

// =============================================================================
// Provider response shape
// =============================================================================

#[derive(Debug, Deserialize)]
struct Envelope {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    feature_member: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "metaDataProperty")]
    meta_data_property: MetaDataProperty,
    #[serde(rename = "Point")]
    point: Point,
}

#[derive(Debug, Deserialize)]
struct MetaDataProperty {
    #[serde(rename = "GeocoderMetaData")]
    geocoder_meta_data: GeocoderMetaData,
}

#[derive(Debug, Deserialize)]
struct GeocoderMetaData {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Point {
    pos: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_with_match() {
        let body = r#"{
            "response": {
                "GeoObjectCollection": {
                    "featureMember": [{
                        "GeoObject": {
                            "metaDataProperty": {
                                "GeocoderMetaData": {
                                    "text": "Россия, Москва, Тверская улица, 1"
                                }
                            },
                            "Point": { "pos": "37.612401 55.756934" }
                        }
                    }]
                }
            }
        }"#;

        let resolved = parse_response(body)
            .expect("should parse")
            .expect("should match");
        assert_eq!(
            resolved.normalized_address,
            "Россия, Москва, Тверская улица, 1"
        );
        assert!((resolved.coordinates.latitude - 55.756934).abs() < 1e-9);
        assert!((resolved.coordinates.longitude - 37.612401).abs() < 1e-9);
    }

    #[test]
    fn test_parse_response_no_match_is_none() {
        let body = r#"{
            "response": {
                "GeoObjectCollection": {
                    "featureMember": []
                }
            }
        }"#;
        assert_eq!(parse_response(body).expect("should parse"), None);
    }

    #[test]
    fn test_parse_response_missing_member_list_is_none() {
        // The provider omits featureMember entirely for some queries.
        let body = r#"{ "response": { "GeoObjectCollection": {} } }"#;
        assert_eq!(parse_response(body).expect("should parse"), None);
    }

    #[test]
    fn test_parse_response_garbage_is_parse_error() {
        let result = parse_response("not json");
        assert!(matches!(result, Err(GeocodeError::Parse(_))));
    }

    #[test]
    fn test_parse_pos_rejects_partial_pair() {
        assert!(matches!(parse_pos("37.61"), Err(GeocodeError::Parse(_))));
        assert!(matches!(parse_pos(""), Err(GeocodeError::Parse(_))));
    }
}
