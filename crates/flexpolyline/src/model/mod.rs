//! Data model types for decoded polylines:
//! - Header metadata (precision, third-dimension semantics)
//! - Coordinates and the decoded result

pub mod header;
pub mod polyline;

pub use header::{Header, ThirdDim};
pub use polyline::{Coordinate, DecodedPolyline};
