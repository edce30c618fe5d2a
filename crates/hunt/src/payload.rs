//! Scanned payload parsing.
//!
//! A QR code carries either a `geo:` URI (`geo:lat,lon[,alt]`) or a JSON
//! object with `latitude`, `longitude`, and an optional `name`.

use std::sync::Arc;

use geo::Point;
use serde::Deserialize;

use crate::models::types::{Result, ScanError, Target};

/// Display name used when a payload carries no usable name
pub const DEFAULT_TARGET_NAME: &str = "Location from QR Code";

const GEO_URI_PREFIX: &str = "geo:";

#[derive(Debug, Deserialize)]
struct RawPayload {
    latitude: Option<f64>,
    longitude: Option<f64>,
    name: Option<String>,
}

/// Parse one decoded barcode payload into a hunt target.
///
/// Pure function over the payload string; the caller decides whether to
/// move on to the hunt screen or stay on the scanner and surface the error.
pub fn parse_target(payload: &str) -> Result<Target> {
    let raw = match payload.strip_prefix(GEO_URI_PREFIX) {
        Some(rest) => parse_geo_uri(rest)?,
        None => serde_json::from_str(payload)
            .map_err(|e| ScanError::MalformedPayload(e.to_string()))?,
    };

    // A coordinate is usable only when present, numeric, and not exactly
    // 0.0; a target sitting exactly on the equator or prime meridian reads
    // as missing.
    let (latitude, longitude) = match (raw.latitude, raw.longitude) {
        (Some(lat), Some(lon)) if is_usable(lat) && is_usable(lon) => (lat, lon),
        _ => return Err(ScanError::MissingCoordinates),
    };

    let name: Arc<str> = match raw.name.as_deref() {
        Some(name) if !name.is_empty() => name.into(),
        _ => DEFAULT_TARGET_NAME.into(),
    };

    Ok(Target {
        name,
        location: Point::new(longitude, latitude),
    })
}

/// Parse the remainder of a `geo:` URI as `lat,lon[,alt,...]`.
/// Fields past the first two (altitude and friends) are ignored.
fn parse_geo_uri(rest: &str) -> Result<RawPayload> {
    let fields: Vec<&str> = rest.split(',').collect();
    if fields.len() < 2 {
        return Err(ScanError::InvalidGeoUri(rest.to_owned()));
    }

    Ok(RawPayload {
        latitude: Some(parse_coordinate(fields[0], rest)?),
        longitude: Some(parse_coordinate(fields[1], rest)?),
        name: None,
    })
}

fn parse_coordinate(field: &str, uri: &str) -> Result<f64> {
    field
        .trim()
        .parse()
        .map_err(|_| ScanError::InvalidGeoUri(uri.to_owned()))
}

fn is_usable(coordinate: f64) -> bool {
    !coordinate.is_nan() && coordinate != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_uri() {
        let target = parse_target("geo:37.7749,-122.4194").unwrap();
        assert_eq!(target.location.y(), 37.7749);
        assert_eq!(target.location.x(), -122.4194);
        assert_eq!(&*target.name, DEFAULT_TARGET_NAME);
    }

    #[test]
    fn test_geo_uri_ignores_altitude() {
        let target = parse_target("geo:1,2,3").unwrap();
        assert_eq!(target.location.y(), 1.0);
        assert_eq!(target.location.x(), 2.0);
    }

    #[test]
    fn test_geo_uri_too_few_fields() {
        assert!(matches!(
            parse_target("geo:37.7749"),
            Err(ScanError::InvalidGeoUri(_))
        ));
    }

    #[test]
    fn test_geo_uri_non_numeric() {
        assert!(matches!(
            parse_target("geo:north,west"),
            Err(ScanError::InvalidGeoUri(_))
        ));
    }

    #[test]
    fn test_json_payload() {
        let target =
            parse_target(r#"{"latitude": 40.7505, "longitude": -73.9935, "name": "Penn Station"}"#)
                .unwrap();
        assert_eq!(target.location.y(), 40.7505);
        assert_eq!(target.location.x(), -73.9935);
        assert_eq!(&*target.name, "Penn Station");
    }

    #[test]
    fn test_json_payload_without_name() {
        let target = parse_target(r#"{"latitude": 40.7505, "longitude": -73.9935}"#).unwrap();
        assert_eq!(&*target.name, DEFAULT_TARGET_NAME);
    }

    #[test]
    fn test_json_payload_empty_name_falls_back() {
        let target =
            parse_target(r#"{"latitude": 40.7505, "longitude": -73.9935, "name": ""}"#).unwrap();
        assert_eq!(&*target.name, DEFAULT_TARGET_NAME);
    }

    #[test]
    fn test_not_json_not_geo() {
        assert!(matches!(
            parse_target("not json, not geo"),
            Err(ScanError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_json_missing_longitude() {
        assert!(matches!(
            parse_target(r#"{"latitude": 10}"#),
            Err(ScanError::MissingCoordinates)
        ));
    }

    #[test]
    fn test_zero_coordinate_reads_as_missing() {
        // Exactly 0.0 counts as absent, so a target on the equator or the
        // prime meridian is rejected.
        assert!(matches!(
            parse_target("geo:0.0,10.0"),
            Err(ScanError::MissingCoordinates)
        ));
        assert!(matches!(
            parse_target(r#"{"latitude": 10.0, "longitude": 0.0}"#),
            Err(ScanError::MissingCoordinates)
        ));
    }

    #[test]
    fn test_geo_uri_tolerates_whitespace() {
        let target = parse_target("geo: 37.7749 ,\t-122.4194").unwrap();
        assert_eq!(target.location.y(), 37.7749);
    }
}
