//! Error types for flexible polyline decoding.

use thiserror::Error;

/// Error during polyline decoding.
///
/// Every variant is terminal: a failed decode yields no coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character outside the 64-symbol URL-safe alphabet appeared.
    #[error("invalid character {character:?} in encoded polyline")]
    InvalidCharacter { character: char },

    /// The input ended while a value was still accumulating
    /// (continuation bit set on the final character of the run).
    #[error("unterminated value: input ended mid-group")]
    UnterminatedValue,

    /// An encoded value carried more significant bits than fit in 64.
    #[error("value overflow: encoded value exceeds 64 bits")]
    ValueOverflow,

    /// Fewer than the two leading header values were present.
    #[error("missing header: expected 2 leading values, found {found}")]
    MissingHeader { found: usize },

    /// The format-version field does not match the supported version.
    #[error("unsupported format version {version} (supported: 1)")]
    UnsupportedVersion { version: u64 },

    /// The values after the header do not form whole coordinate groups.
    #[error("truncated encoding: {leftover} leftover value(s) cannot form a coordinate")]
    TruncatedEncoding { leftover: usize },
}
