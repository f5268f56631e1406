//! Decoded polyline types.
//!
//! These hold coordinates as plain `f64` values; the compact wire encoding
//! exists only at the decode boundary.

use crate::model::Header;

/// One decoded coordinate.
///
/// `third` is `Some` exactly when the header's third dimension is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    pub third: Option<f64>,
}

/// Result of decoding one encoded polyline string.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPolyline {
    /// Header metadata (precision, third-dimension semantics).
    pub header: Header,
    /// Coordinates in encoding order.
    pub polyline: Vec<Coordinate>,
}

impl DecodedPolyline {
    /// Returns `(lat, lng)` pairs in encoding order, dropping any third
    /// dimension. Convenient for callers that only render a 2D path.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.polyline.iter().map(|c| (c.lat, c.lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThirdDim;

    fn header_2d() -> Header {
        Header {
            precision: 5,
            third_dim: ThirdDim::Absent,
            third_dim_precision: 0,
        }
    }

    #[test]
    fn test_points_drops_third_dimension() {
        let decoded = DecodedPolyline {
            header: Header {
                third_dim: ThirdDim::Altitude,
                ..header_2d()
            },
            polyline: vec![
                Coordinate { lat: 1.0, lng: 2.0, third: Some(30.0) },
                Coordinate { lat: 1.5, lng: 2.5, third: Some(40.0) },
            ],
        };
        let points: Vec<_> = decoded.points().collect();
        assert_eq!(points, vec![(1.0, 2.0), (1.5, 2.5)]);
    }

    #[test]
    fn test_points_empty() {
        let decoded = DecodedPolyline {
            header: header_2d(),
            polyline: vec![],
        };
        assert_eq!(decoded.points().count(), 0);
    }
}
