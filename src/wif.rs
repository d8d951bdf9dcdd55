//! Compressed WIF validation over a decoded [`U320`].
//!
//! Byte layout of [`U320::to_bytes`] for a 52-digit key:
//!
//! | bytes     | content                                        |
//! |-----------|------------------------------------------------|
//! | `[0..2)`  | always zero, discarded                         |
//! | `[2]`     | version (`0x80`)                               |
//! | `[3..35)` | 32-byte private key                            |
//! | `[35]`    | compression flag (`0x01`)                      |
//! | `[36..40)`| first 4 bytes of `SHA256(SHA256([2..36)))`     |
//!
//! Validation runs in two stages. The flag byte sits in limb 0, so a single mask
//! compare rejects ~255/256 of random candidates before any hashing; only the
//! survivors pay for serialization and the double SHA-256.

use crate::uint::{BYTES, U320};
use log::trace;
use sha2::{Digest, Sha256};

/// Version byte of mainnet private keys.
pub const VERSION_BYTE: u8 = 0x80;
/// Flag byte marking the key as compressed; the only form accepted here.
pub const COMPRESSED_FLAG: u8 = 0x01;

const VERSION_OFFSET: usize = 2;
const KEY_OFFSET: usize = 3;
const FLAG_OFFSET: usize = 35;
const CHECKSUM_OFFSET: usize = 36;
const CHECKSUM_LEN: usize = BYTES - CHECKSUM_OFFSET;

// Byte 35 of the big-endian form is byte 4 (from the bottom) of limb 0.
const FLAG_SHIFT: u32 = ((BYTES - 1 - FLAG_OFFSET) * 8) as u32;
const FLAG_MASK: u64 = 0xff << FLAG_SHIFT;
const FLAG_EXPECTED: u64 = (COMPRESSED_FLAG as u64) << FLAG_SHIFT;

/// Whether `value` is a well-formed compressed WIF key.
///
/// Never fails: a wrong flag byte or checksum is just `false`.
#[must_use]
#[inline]
pub fn is_valid(value: &U320) -> bool {
    if !has_compressed_flag(value) {
        return false;
    }
    checksum_matches(value)
}

/// Stage 1: flag byte equals [`COMPRESSED_FLAG`]. One mask, one compare.
#[must_use]
#[inline]
pub fn has_compressed_flag(value: &U320) -> bool {
    value.limbs()[0] & FLAG_MASK == FLAG_EXPECTED
}

/// Stage 2: trailing 4 bytes equal the double SHA-256 prefix of the payload.
///
/// Kept out of line so the digest buffers are only reserved once stage 1 passes.
#[must_use]
#[inline(never)]
pub fn checksum_matches(value: &U320) -> bool {
    let raw = value.to_bytes();
    let (payload, claimed) = raw[VERSION_OFFSET..].split_at(CHECKSUM_OFFSET - VERSION_OFFSET);
    let digest = double_sha256(payload);
    let ok = digest[..CHECKSUM_LEN] == *claimed;
    if !ok {
        trace!(
            "checksum mismatch: claimed {claimed:02x?}, computed {:02x?}",
            &digest[..CHECKSUM_LEN]
        );
    }
    ok
}

/// Version byte of a decoded key. Not checked by [`is_valid`].
#[must_use]
pub fn version(value: &U320) -> u8 {
    value.to_bytes()[VERSION_OFFSET]
}

/// The 32-byte private key carried by a decoded key.
#[must_use]
pub fn secret_key(value: &U320) -> [u8; 32] {
    let raw = value.to_bytes();
    let mut key = [0u8; 32];
    key.copy_from_slice(&raw[KEY_OFFSET..FLAG_OFFSET]);
    key
}

/// Encodes `secret` as a compressed mainnet WIF key (always 52 characters).
#[must_use]
pub fn encode_compressed(secret: &[u8; 32]) -> String {
    let mut raw = [0u8; BYTES];
    raw[VERSION_OFFSET] = VERSION_BYTE;
    raw[KEY_OFFSET..FLAG_OFFSET].copy_from_slice(secret);
    raw[FLAG_OFFSET] = COMPRESSED_FLAG;
    let digest = double_sha256(&raw[VERSION_OFFSET..CHECKSUM_OFFSET]);
    raw[CHECKSUM_OFFSET..].copy_from_slice(&digest[..CHECKSUM_LEN]);
    U320::from_bytes(raw).to_base58()
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}
