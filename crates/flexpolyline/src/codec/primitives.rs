//! Primitive decoding for the flexible polyline wire format.
//!
//! Implements the unsigned value stream (little-endian 5-bit groups with a
//! continuation bit) and signed zigzag conversion.

use crate::codec::alphabet::decode_char;
use crate::error::DecodeError;
use crate::limits::MAX_VALUE_BITS;

/// Payload bits contributed by each encoded character.
const GROUP_BITS: u32 = 5;

/// Mask selecting the payload bits of a 6-bit code.
const GROUP_MASK: u64 = 0x1F;

/// Continuation flag: set when more characters belong to the current value.
const CONTINUATION_BIT: u8 = 0x20;

/// Decodes the full character stream into its sequence of unsigned values.
///
/// Each character contributes 5 payload bits, little end first; the first
/// character in a run without the continuation bit terminates the value.
/// Pure function of the input string.
///
/// # Errors
///
/// - [`DecodeError::InvalidCharacter`] for symbols outside the alphabet.
/// - [`DecodeError::ValueOverflow`] if a value needs more than 64 bits.
/// - [`DecodeError::UnterminatedValue`] if the input ends mid-value.
pub fn decode_unsigned_values(encoded: &str) -> Result<Vec<u64>, DecodeError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut values = Vec::new();

    for character in encoded.chars() {
        let code = decode_char(character)?;
        let group = u64::from(code) & GROUP_MASK;

        // Shift advances in steps of 5, so 60 is the last position where a
        // group can still fit; there only the low 4 of its bits may be set.
        if shift >= MAX_VALUE_BITS || (shift == 60 && group > 0xF) {
            return Err(DecodeError::ValueOverflow);
        }
        result |= group << shift;

        if code & CONTINUATION_BIT == 0 {
            values.push(result);
            result = 0;
            shift = 0;
        } else {
            shift += GROUP_BITS;
        }
    }

    if shift > 0 {
        return Err(DecodeError::UnterminatedValue);
    }

    Ok(values)
}

/// Decodes a zigzag-encoded unsigned value back to signed.
///
/// Odd values encode negatives: 0 -> 0, 1 -> -1, 2 -> 1, 3 -> -2, 4 -> 2.
#[inline]
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ (-((value & 1) as i64))
}
