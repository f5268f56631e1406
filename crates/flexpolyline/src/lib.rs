//! Decoder for the flexible polyline format.
//!
//! Flexible polyline is a compact, versioned, URL-safe text encoding of a
//! sequence of 2D or 3D geographic coordinates. Per-coordinate deltas are
//! zigzag-encoded and written as variable-length chains of 6-bit symbols,
//! preceded by a packed header carrying precision and third-dimension
//! metadata.
//!
//! # Quick Start
//!
//! ```rust
//! use flexpolyline::{decode, ThirdDim};
//!
//! let decoded = decode("BFoz5xJ67i1B1B7PzIhaxL7Y").unwrap();
//!
//! assert_eq!(decoded.header.precision, 5);
//! assert_eq!(decoded.header.third_dim, ThirdDim::Absent);
//! assert_eq!(decoded.polyline.len(), 4);
//! assert_eq!(decoded.polyline[0].lat, 50.10228);
//! assert_eq!(decoded.polyline[0].lng, 8.69821);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Decoded data types (Header, ThirdDim, Coordinate)
//! - [`codec`]: Wire-format decoding
//! - [`error`]: Error types
//! - [`limits`]: Format constants and decoder bounds
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Characters outside the alphabet are rejected, never coerced to zero
//! - Values are bounded to 64 bits; wider chains are rejected
//! - Malformed input fails with a specific error, never a partial result
//!
//! # Concurrency
//!
//! Decoding is a pure, synchronous computation. The only shared state is
//! the alphabet table, initialized once and read-only afterwards, so decode
//! calls may run concurrently without coordination.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used items at crate root
pub use codec::decode;
pub use error::DecodeError;
pub use model::{Coordinate, DecodedPolyline, Header, ThirdDim};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
