//! Wire-format decoding for flexible polylines.
//!
//! Pipeline: character stream -> unsigned value stream -> header -> signed
//! deltas -> absolute coordinates.

pub mod alphabet;
pub mod header;
pub mod polyline;
pub mod primitives;

pub use alphabet::decode_char;
pub use header::decode_header;
pub use polyline::decode;
pub use primitives::{decode_unsigned_values, zigzag_decode};
