//! Fixed-width 320-bit unsigned integer for the decode hot path.
//! Five u64 limbs, LE limb order (limb 0 least significant).
//! Arithmetic wraps modulo 2^320: a 52-digit Base58 value needs at most 305 bits,
//! so the dropped carry never holds real data.
//! Perf: no allocs, fixed trip count per op; mul uses native u64 x u64 -> u128.

/// Number of 64-bit limbs.
pub const LIMBS: usize = 5;
/// Width of the big-endian serialization.
pub const BYTES: usize = LIMBS * 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct U320([u64; LIMBS]);

impl U320 {
    pub const ZERO: Self = Self([0; LIMBS]);
    pub const ONE: Self = Self([1, 0, 0, 0, 0]);
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    /// Builds a value from raw limbs, least significant first.
    #[must_use]
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0, 0])
    }

    #[must_use]
    pub const fn limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Ripple-carry add; carry out of the top limb is dropped.
    #[inline]
    pub fn add_in_place(&mut self, rhs: &Self) {
        let mut carry = false;
        for (a, &b) in self.0.iter_mut().zip(&rhs.0) {
            let (sum, c1) = a.overflowing_add(b);
            let (sum, c2) = sum.overflowing_add(u64::from(carry));
            *a = sum;
            carry = c1 | c2;
        }
    }

    #[must_use]
    #[inline]
    pub fn wrapping_add(mut self, rhs: Self) -> Self {
        self.add_in_place(&rhs);
        self
    }

    /// Multiplies by a 64-bit scalar modulo 2^320.
    ///
    /// Each limb yields a 128-bit partial product; its low half is stored and the
    /// high half is carried into the next limb.
    #[must_use]
    #[inline]
    pub fn mul_scalar(mut self, scalar: u64) -> Self {
        self.mul_add_in_place(scalar, 0);
        self
    }

    /// `self = self * scalar + addend` in one carry pass (Horner step).
    ///
    /// `(2^64-1)^2 + (2^64-1)` still fits in u128, so the fused add cannot overflow
    /// the partial product.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mul_add_in_place(&mut self, scalar: u64, addend: u64) {
        let mut carry = addend;
        for limb in &mut self.0 {
            let wide = u128::from(*limb) * u128::from(scalar) + u128::from(carry);
            *limb = wide as u64;
            carry = (wide >> 64) as u64;
        }
    }

    /// Big-endian serialization: top limb's top byte first, 8 bytes per limb.
    #[must_use]
    #[inline]
    pub fn to_bytes(&self) -> [u8; BYTES] {
        let mut buf = [0u8; BYTES];
        for (chunk, limb) in buf.chunks_exact_mut(8).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        buf
    }

    /// Inverse of [`U320::to_bytes`].
    #[must_use]
    pub fn from_bytes(bytes: [u8; BYTES]) -> Self {
        let mut limbs = [0u64; LIMBS];
        for (limb, chunk) in limbs.iter_mut().rev().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }
        Self(limbs)
    }

    /// The 38 low bytes of [`U320::to_bytes`]; the two leading bytes are always
    /// zero for a 52-digit key and are discarded.
    #[must_use]
    pub fn payload_bytes(&self) -> [u8; BYTES - 2] {
        let raw = self.to_bytes();
        let mut out = [0u8; BYTES - 2];
        out.copy_from_slice(&raw[2..]);
        out
    }
}

impl From<u64> for U320 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl std::ops::Add for U320 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl std::ops::AddAssign<&U320> for U320 {
    fn add_assign(&mut self, rhs: &U320) {
        self.add_in_place(rhs);
    }
}

impl std::ops::AddAssign for U320 {
    fn add_assign(&mut self, rhs: U320) {
        self.add_in_place(&rhs);
    }
}

impl std::ops::Mul<u64> for U320 {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self {
        self.mul_scalar(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const M: u64 = u64::MAX;

    #[test]
    fn add_in_place_known() {
        let cases = [
            (U320::ZERO, U320::ZERO, U320::ZERO),
            (
                U320::from_limbs([1, 2, 3, 4, 5]),
                U320::from_limbs([1, 1, 1, 1, 1]),
                U320::from_limbs([2, 3, 4, 5, 6]),
            ),
            // carry ripples through every limb and falls off the top
            (U320::MAX, U320::from_u64(2), U320::ONE),
            (U320::from_u64(2), U320::MAX, U320::ONE),
        ];
        for (x, y, z) in cases {
            let mut acc = x;
            acc.add_in_place(&y);
            assert_eq!(acc, z);
            assert_eq!(x + y, z);
        }
    }

    #[test]
    fn add_carries_across_limb_boundary() {
        let x = U320::from_limbs([M, M, 0, 0, 0]);
        assert_eq!(x + U320::ONE, U320::from_limbs([0, 0, 1, 0, 0]));
    }

    #[test]
    fn mul_scalar_known() {
        let x = U320::from_limbs([1, 2, 3, 4, 5]);
        assert_eq!(U320::ONE.mul_scalar(0), U320::ZERO);
        assert_eq!(x.mul_scalar(1), x);
        assert_eq!(x * 2, U320::from_limbs([2, 4, 6, 8, 10]));
        // -1 * (2^64 - 1) mod 2^320 == 2^320 - 2^64 + 1
        assert_eq!(U320::MAX.mul_scalar(M), U320::from_limbs([1, M, M, M, M]));
    }

    #[test]
    fn mul_scalar_carries_high_half() {
        // 2^64 - 1 times 2 spills exactly one bit into limb 1
        let x = U320::from_u64(M);
        assert_eq!(x * 2, U320::from_limbs([M - 1, 1, 0, 0, 0]));
        // 2^256 * 2^63 * 2 wraps past 2^320
        let top = U320::from_limbs([0, 0, 0, 0, 1 << 63]);
        assert_eq!(top * 2, U320::ZERO);
    }

    #[test]
    fn mul_add_in_place_is_horner_step() {
        let mut acc = U320::from_u64(7);
        acc.mul_add_in_place(58, 3);
        assert_eq!(acc, U320::from_u64(7 * 58 + 3));

        let mut acc = U320::from_u64(M);
        acc.mul_add_in_place(1, 1);
        assert_eq!(acc, U320::from_limbs([0, 1, 0, 0, 0]));
    }

    #[test]
    fn to_bytes_big_endian() {
        let x = U320::from_limbs([1, 2, 3, 4, 5]);
        assert_eq!(
            x.to_bytes(),
            hex!("0000000000000005 0000000000000004 0000000000000003 0000000000000002 0000000000000001")
        );
        assert_eq!(U320::MAX.to_bytes(), [255u8; BYTES]);
        assert_eq!(U320::ZERO.to_bytes(), [0u8; BYTES]);
    }

    #[test]
    fn from_bytes_inverts_to_bytes() {
        let x = U320::from_limbs([
            0xf30d_d701_3682_eefb,
            0xc341_78fa_94a2_8a27,
            0xf25c_b345_d825_4ebd,
            0x4efa_8771_7efc_fd76,
            0x0000_80b5_66f6_86f7,
        ]);
        assert_eq!(U320::from_bytes(x.to_bytes()), x);
    }

    #[test]
    fn payload_bytes_drops_top_two() {
        let x = U320::from_limbs([1, 2, 3, 4, 5]);
        assert_eq!(
            x.payload_bytes(),
            hex!("000000000005 0000000000000004 0000000000000003 0000000000000002 0000000000000001")
        );
        assert_eq!(U320::MAX.payload_bytes(), [255u8; 38]);
    }
}
