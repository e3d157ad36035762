//! Transport codec for data packages: `base64(JSON(record))`.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;
use thiserror::Error;

use crate::model::{Coordinate, ProjectRecord};

/// Standard alphabet; pads on encode and accepts either form on decode.
pub const TRANSPORT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{field} is not a finite number")]
    NonFinite { field: String },
    #[error("failed to serialise data package: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("data package is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("data package is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialises a record into its opaque transport string.
pub fn encode(record: &ProjectRecord) -> Result<String, EncodeError> {
    ensure_finite(record)?;
    let json = serde_json::to_vec(record)?;
    Ok(TRANSPORT.encode(json))
}

/// Reverses [`encode`]. The result is untyped; see [`crate::validate`].
///
/// Text that is not UTF-8 is read as Latin-1, which is what the browser app's
/// `btoa` export produces for characters such as `é`.
pub fn decode(encoded: &str) -> Result<Value, DecodeError> {
    let compact: String = encoded
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();
    let bytes = TRANSPORT.decode(compact)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    };
    Ok(serde_json::from_str(&text)?)
}

// serde_json writes NaN and infinities as `null`, which would not survive a round trip.
fn ensure_finite(record: &ProjectRecord) -> Result<(), EncodeError> {
    if let Some(zoom) = record.map_zoom {
        check_finite(zoom, || "mapZoom".to_string())?;
    }
    if let Some(center) = &record.map_center {
        check_coordinate(center, || "mapCenter".to_string())?;
    }

    for (region_idx, region) in record.drawn_areas.iter().enumerate() {
        check_finite(region.area, || format!("drawnAreas[{region_idx}].area"))?;
        for (path_idx, path) in region.paths.iter().enumerate() {
            for (point_idx, coordinate) in path.iter().enumerate() {
                check_coordinate(coordinate, || {
                    format!("drawnAreas[{region_idx}].paths[{path_idx}][{point_idx}]")
                })?;
            }
        }
    }

    Ok(())
}

fn check_coordinate(
    coordinate: &Coordinate,
    prefix: impl Fn() -> String,
) -> Result<(), EncodeError> {
    check_finite(coordinate.lat, || format!("{}.lat", prefix()))?;
    check_finite(coordinate.lng, || format!("{}.lng", prefix()))
}

fn check_finite(value: f64, field: impl FnOnce() -> String) -> Result<(), EncodeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EncodeError::NonFinite { field: field() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Region, RegionKind};

    #[test]
    fn non_finite_field_is_named() {
        let mut record = ProjectRecord::new_session(time::OffsetDateTime::UNIX_EPOCH);
        record.drawn_areas.push(Region::new(
            4,
            RegionKind::Sod,
            12.0,
            vec![vec![Coordinate::new(1.0, 1.0), Coordinate::new(f64::NAN, 2.0)]],
        ));

        let err = encode(&record).expect_err("NaN must be rejected");
        match err {
            EncodeError::NonFinite { field } => {
                assert_eq!(field, "drawnAreas[0].paths[0][1].lat");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn infinite_zoom_is_rejected() {
        let mut record = ProjectRecord::new_session(time::OffsetDateTime::UNIX_EPOCH);
        record.map_zoom = Some(f64::INFINITY);
        assert!(matches!(
            encode(&record),
            Err(EncodeError::NonFinite { field }) if field == "mapZoom"
        ));
    }
}
