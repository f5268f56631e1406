//! Top-level polyline decoding: the full pipeline from encoded string to
//! absolute coordinates.

use crate::codec::header::decode_header;
use crate::codec::primitives::{decode_unsigned_values, zigzag_decode};
use crate::error::DecodeError;
use crate::model::{Coordinate, DecodedPolyline};

/// Decodes an encoded polyline string into header metadata plus coordinates.
///
/// Runs the unsigned-value stream decoder over the whole input, interprets
/// the two leading values as the header, then accumulates zigzag-decoded
/// per-axis deltas into absolute positions starting from zero. The result
/// preserves encoding order; repeated calls on the same input produce
/// identical output.
///
/// Each delta is scaled by `10^precision` (or `10^third_dim_precision` for
/// the third axis) after zigzag decoding, never before.
///
/// # Errors
///
/// Any structural violation fails the whole call with a specific
/// [`DecodeError`]; there is no partial result.
///
/// # Example
///
/// ```rust
/// let decoded = flexpolyline::decode("BFgkh9Bgywe4gYgi5C").unwrap();
/// assert_eq!(decoded.polyline[0].lat, 10.0);
/// assert_eq!(decoded.polyline[0].lng, 5.0);
/// ```
pub fn decode(encoded: &str) -> Result<DecodedPolyline, DecodeError> {
    let values = decode_unsigned_values(encoded)?;
    if values.len() < 2 {
        return Err(DecodeError::MissingHeader {
            found: values.len(),
        });
    }
    let header = decode_header(values[0], values[1])?;

    let factor_degree = 10f64.powi(header.precision as i32);
    let factor_z = 10f64.powi(header.third_dim_precision as i32);
    let has_third = header.third_dim.is_present();
    let dim = header.dimensionality();

    let body = &values[2..];
    let leftover = body.len() % dim;
    if leftover != 0 {
        return Err(DecodeError::TruncatedEncoding { leftover });
    }

    let mut last_lat = 0.0;
    let mut last_lng = 0.0;
    let mut last_z = 0.0;
    let mut polyline = Vec::with_capacity(body.len() / dim);

    for group in body.chunks_exact(dim) {
        last_lat += zigzag_decode(group[0]) as f64 / factor_degree;
        last_lng += zigzag_decode(group[1]) as f64 / factor_degree;
        let third = if has_third {
            last_z += zigzag_decode(group[2]) as f64 / factor_z;
            Some(last_z)
        } else {
            None
        };
        polyline.push(Coordinate {
            lat: last_lat,
            lng: last_lng,
            third,
        });
    }

    Ok(DecodedPolyline { header, polyline })
}
