//! Base58 decoding of 52-digit WIF keys into a fixed-width [`U320`].
//! Precomp table for char->val; digit-by-digit Horner (MSB first): acc = acc * 58 + val.
//! Exact carry-prop in five u64 limbs, no allocs in loop.

use crate::uint::U320;
use crate::{ALPHABET, KEY_LEN};
use log::debug;

const BASE: u64 = 58;
const INVALID: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeError {
    /// Input is not exactly [`KEY_LEN`] bytes; carries the observed length.
    #[error("invalid key length: expected 52, got {0}")]
    InvalidLength(usize),
    /// Byte outside the Base58 alphabet; carries the raw byte value.
    #[error("invalid character: {0}")]
    InvalidCharacter(u8),
}

/// Decodes a 52-digit Base58 key into its 320-bit value.
///
/// # Errors
/// - `InvalidLength(len)`: input is not exactly 52 bytes.
/// - `InvalidCharacter(byte)`: first byte not in [`ALPHABET`] (case-sensitive).
#[inline]
pub fn decode(key: &str) -> Result<U320, DecodeError> {
    let bytes = key.as_bytes();
    if bytes.len() != KEY_LEN {
        debug!("rejecting key of length {}", bytes.len());
        return Err(DecodeError::InvalidLength(bytes.len()));
    }
    let mut acc = U320::ZERO;
    for &ch in bytes {
        let val = DIGIT_TO_VAL[usize::from(ch)];
        if val == INVALID {
            debug!("rejecting key with non-alphabet byte {ch}");
            return Err(DecodeError::InvalidCharacter(ch));
        }
        acc.mul_add_in_place(BASE, u64::from(val));
    }
    Ok(acc)
}

/// Place value of the digit at `index` (0 = leftmost) in a 52-digit key: `58^(51 - index)`.
///
/// Adding it to a decoded key bumps that digit by one, carrying leftwards, which
/// lets a scanner walk one digit position without re-decoding strings.
/// Returns `None` when `index >= 52`.
#[must_use]
pub fn digit_weight(index: usize) -> Option<U320> {
    if index >= KEY_LEN {
        return None;
    }
    let mut weight = U320::ONE;
    for _ in index + 1..KEY_LEN {
        weight.mul_add_in_place(BASE, 0);
    }
    Some(weight)
}

#[allow(clippy::cast_possible_truncation)]
const DIGIT_TO_VAL: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};
