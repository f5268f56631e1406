//! Header decoding: format-version gate and bitfield extraction.

use crate::error::DecodeError;
use crate::limits::FORMAT_VERSION;
use crate::model::{Header, ThirdDim};

// Header word layout, least-significant bits first:
// bits 0-3 precision, bits 4-6 third_dim, bits 7-10 third_dim_precision.
const PRECISION_MASK: u64 = 0xF;
const THIRD_DIM_SHIFT: u32 = 4;
const THIRD_DIM_MASK: u64 = 0x7;
const THIRD_DIM_PRECISION_SHIFT: u32 = 7;
const THIRD_DIM_PRECISION_MASK: u64 = 0xF;

/// Decodes the header from the first two unsigned values of the stream.
///
/// Version mismatch is always fatal; the format carries no
/// forward-compatibility story.
pub fn decode_header(version: u64, word: u64) -> Result<Header, DecodeError> {
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion { version });
    }
    Ok(Header {
        precision: (word & PRECISION_MASK) as u32,
        third_dim: ThirdDim::from_u8(((word >> THIRD_DIM_SHIFT) & THIRD_DIM_MASK) as u8),
        third_dim_precision: ((word >> THIRD_DIM_PRECISION_SHIFT) & THIRD_DIM_PRECISION_MASK)
            as u32,
    })
}
