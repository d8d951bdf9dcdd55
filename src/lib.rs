//! Fixed-width Base58 decoding and fast validation of compressed WIF private keys.
//!
//! A 52-digit key decodes into a stack-resident [`U320`] by Horner steps in five
//! u64 limbs; [`is_valid`] rejects most bad candidates with one mask compare before
//! falling back to the double-SHA256 checksum.
//!
//! ```
//! let value = wifc::decode("L3JLGe5rCiCswFyUKrLZc38iGunHULPk4aFFuHELHKUunt1Ke33Q").unwrap();
//! assert!(wifc::is_valid(&value));
//! ```

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Digits in a compressed WIF key.
pub const KEY_LEN: usize = 52;

mod decode;
mod encode;
mod uint;
pub mod wif;

pub use decode::{decode, digit_weight, DecodeError};
pub use uint::{BYTES, LIMBS, U320};
pub use wif::{encode_compressed, is_valid, COMPRESSED_FLAG, VERSION_BYTE};
