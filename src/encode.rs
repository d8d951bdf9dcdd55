//! Base58 rendering of a [`U320`].
//! Repeated divmod by 58 over the u64 limbs with a u128 temp; slow path, allocates the output only.
//! Plain radix conversion: no '1' padding for leading zero digits, zero renders as "".
use crate::uint::{LIMBS, U320};
use crate::ALPHABET;

impl U320 {
    /// Renders the value in Base58, most significant digit first.
    ///
    /// The output is not padded: a 52-digit key whose leading digits are `'1'`
    /// comes back shorter, and the caller must left-pad to recover the 52-digit form.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_base58(&self) -> String {
        let mut num = self.limbs();
        let mut len = significant_limbs(&num);
        let mut output = Vec::with_capacity(crate::KEY_LEN);
        while len > 0 {
            let mut remainder = 0u64;
            for limb in num[..len].iter_mut().rev() {
                let temp = (u128::from(remainder) << 64) | u128::from(*limb);
                *limb = (temp / 58) as u64;
                remainder = (temp % 58) as u64;
            }
            output.push(ALPHABET[remainder as usize]);
            len = significant_limbs(&num[..len]);
        }
        output.reverse();
        output.into_iter().map(char::from).collect()
    }
}

fn significant_limbs(num: &[u64]) -> usize {
    debug_assert!(num.len() <= LIMBS);
    num.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1)
}
