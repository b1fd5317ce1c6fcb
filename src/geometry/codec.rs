//! Canonical text encoding of a [`Shape`] for the coordinates form field.
//!
//! Points are written as a plain pair, `"<lat>, <lng>"`, fixed to five
//! decimals. Boxes are written as a JSON object with `northEast` and
//! `southWest` corners at full precision, so a consumer can tell the two
//! forms apart and recover box corners exactly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{LatLng, Shape};

/// Decimal places used for point coordinates.
pub const POINT_PRECISION: usize = 5;

/// Errors produced when classifying a serialized geometry string.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("no geometry was drawn")]
    Empty,

    #[error("invalid bounding box: {0}")]
    InvalidBox(#[from] serde_json::Error),

    #[error("malformed coordinates: {0:?}")]
    Malformed(String),
}

#[derive(Serialize, Deserialize)]
struct BoxForm {
    #[serde(rename = "northEast")]
    north_east: LatLng,
    #[serde(rename = "southWest")]
    south_west: LatLng,
}

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Formats `value` to [`POINT_PRECISION`] decimals the way a browser's
/// `toFixed` does: exact ties round away from zero, and `-0.0` prints
/// unsigned.
fn fixed(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((whole, frac)) = exact.split_once('.') else {
        return exact;
    };

    let mut digits: Vec<u8> = whole.bytes().chain(frac.bytes().take(POINT_PRECISION)).collect();
    if frac.as_bytes().get(POINT_PRECISION).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - POINT_PRECISION;
    let sign = if value < 0.0 { "-" } else { "" };
    let whole: String = digits[..split].iter().copied().map(char::from).collect();
    let frac: String = digits[split..].iter().copied().map(char::from).collect();
    format!("{sign}{whole}.{frac}")
}

pub fn encode_point(lat: f64, lng: f64) -> String {
    format!("{}, {}", fixed(lat), fixed(lng))
}

pub fn encode_box(north_east: LatLng, south_west: LatLng) -> String {
    let corners = [north_east.lat, north_east.lng, south_west.lat, south_west.lng];
    if !corners.iter().all(|value| value.is_finite()) {
        log::warn!("encoding box with non-finite corner {north_east} / {south_west}; it will not decode");
    }

    let form = BoxForm {
        north_east,
        south_west,
    };
    serde_json::to_string(&form).unwrap_or_else(|err| {
        log::warn!("failed to encode box: {err}");
        String::new()
    })
}

pub fn encode(shape: &Shape) -> String {
    match *shape {
        Shape::Point {
            latitude,
            longitude,
        } => encode_point(latitude, longitude),
        Shape::BoundingBox {
            north_east,
            south_west,
        } => encode_box(north_east, south_west),
    }
}

/// Classifies and parses a serialized geometry.
///
/// Box form is tried first; anything that is not a JSON object is read as a
/// point pair. Point values come back at the five-decimal precision they
/// were written with.
pub fn decode(input: &str) -> Result<Shape, CodecError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CodecError::Empty);
    }

    if trimmed.starts_with('{') {
        let form: BoxForm = serde_json::from_str(trimmed)?;
        return Ok(Shape::BoundingBox {
            north_east: form.north_east,
            south_west: form.south_west,
        });
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let parts: Vec<&str> = compact.split(',').collect();
    let &[lat, lng] = parts.as_slice() else {
        return Err(CodecError::Malformed(input.to_owned()));
    };

    let parse = |raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| CodecError::Malformed(input.to_owned()))
    };

    Ok(Shape::Point {
        latitude: parse(lat)?,
        longitude: parse(lng)?,
    })
}
