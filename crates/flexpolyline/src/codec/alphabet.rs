//! The 64-symbol URL-safe alphabet and its reverse lookup table.

use lazy_static::lazy_static;

use crate::error::DecodeError;

/// Forward table: 6-bit value to symbol.
///
/// Canonical definition of the alphabet; the reverse table below is derived
/// from it. Decoding itself only consults the reverse table.
pub const ENCODING_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Lowest codepoint covered by the reverse table (`'-'`).
const TABLE_BASE: u8 = b'-';

/// Sentinel for codepoints inside the covered range that are not alphabet
/// symbols.
const INVALID: i8 = -1;

lazy_static! {
    /// Reverse table keyed by `codepoint - '-'`, covering `'-'..='z'`.
    /// Built once from [`ENCODING_TABLE`]; read-only afterwards.
    static ref DECODING_TABLE: [i8; 78] = {
        let mut table = [INVALID; 78];
        for (value, &symbol) in ENCODING_TABLE.iter().enumerate() {
            table[(symbol - TABLE_BASE) as usize] = value as i8;
        }
        table
    };
}

/// Maps one symbol to its 6-bit code.
///
/// Fails with [`DecodeError::InvalidCharacter`] for anything outside the
/// alphabet; invalid input is never coerced to a code.
#[inline]
pub fn decode_char(character: char) -> Result<u8, DecodeError> {
    let index = (character as u32).wrapping_sub(u32::from(TABLE_BASE)) as usize;
    match DECODING_TABLE.get(index) {
        Some(&code) if code != INVALID => Ok(code as u8),
        _ => Err(DecodeError::InvalidCharacter { character }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_char_known_symbols() {
        assert_eq!(decode_char('A').unwrap(), 0);
        assert_eq!(decode_char('F').unwrap(), 5);
        assert_eq!(decode_char('Z').unwrap(), 25);
        assert_eq!(decode_char('a').unwrap(), 26);
        assert_eq!(decode_char('z').unwrap(), 51);
        assert_eq!(decode_char('0').unwrap(), 52);
        assert_eq!(decode_char('9').unwrap(), 61);
        assert_eq!(decode_char('-').unwrap(), 62);
        assert_eq!(decode_char('_').unwrap(), 63);
    }

    #[test]
    fn test_decode_char_round_trips_whole_alphabet() {
        for (value, &symbol) in ENCODING_TABLE.iter().enumerate() {
            assert_eq!(decode_char(symbol as char).unwrap(), value as u8);
        }
    }

    #[test]
    fn test_decode_char_rejects_non_alphabet() {
        // Inside the covered codepoint range but not in the alphabet.
        for c in ['.', '/', ':', '@', '[', '`'] {
            assert_eq!(
                decode_char(c),
                Err(DecodeError::InvalidCharacter { character: c })
            );
        }
        // Outside the covered range entirely.
        for c in [' ', '!', '~', '+', '\u{20AC}'] {
            assert_eq!(
                decode_char(c),
                Err(DecodeError::InvalidCharacter { character: c })
            );
        }
    }
}
