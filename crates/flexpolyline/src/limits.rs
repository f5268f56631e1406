//! Format constants and decoder bounds.

/// The single supported format version. Any other value in the leading
/// header position fails the decode.
pub const FORMAT_VERSION: u64 = 1;

/// Maximum significant bits in one unsigned value.
///
/// Values accumulate 5-bit groups into a `u64`; a conforming encoder working
/// from zigzag-encoded `i64` deltas never needs more. Groups whose bits
/// would land at or above this position are rejected with `ValueOverflow`
/// rather than silently wrapped.
pub const MAX_VALUE_BITS: u32 = 64;
