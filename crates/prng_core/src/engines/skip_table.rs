//! Jump-ahead multipliers for the splittable engine's `x` lane.
//!
//! Because the lane recurrence is purely multiplicative, advancing `n` steps
//! is a multiplication by `Mx^n mod 2^64`. Writing `n` in binary,
//! `Mx^n = prod Mx^(2^i)` over the set bits `i`, so a table of the 64 powers
//! `Mx^(2^i)` turns any jump into at most 64 multiplications.
//!
//! The table is built at compile time by repeated squaring. The
//! multiplicative group of odd residues modulo 2^64 has exponent 2^62, so the
//! final two entries collapse to 1.

use super::scg::SCG_MULTIPLIER_X;

/// `SKIP_TABLE[i] == Mx^(2^i) mod 2^64`.
pub static SKIP_TABLE: [u64; 64] = build_skip_table(SCG_MULTIPLIER_X);

/// Builds the table of successive squares of `multiplier`.
pub const fn build_skip_table(multiplier: u64) -> [u64; 64] {
    let mut table = [0u64; 64];
    table[0] = multiplier;
    let mut i = 1;
    while i < 64 {
        table[i] = table[i - 1].wrapping_mul(table[i - 1]);
        i += 1;
    }
    table
}

/// Returns `Mx^distance mod 2^64` assembled from the set bits of `distance`.
#[inline]
pub fn jump_multiplier(distance: u64) -> u64 {
    let mut multiplier = 1u64;
    let mut remaining = distance;
    let mut bit = 0usize;
    while remaining != 0 {
        if remaining & 1 == 1 {
            multiplier = multiplier.wrapping_mul(SKIP_TABLE[bit]);
        }
        remaining >>= 1;
        bit += 1;
    }
    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_head_matches_reference_values() {
        assert_eq!(SKIP_TABLE[0], 0x6a5d_39ea_e116_586d);
        assert_eq!(SKIP_TABLE[1], 0xb954_7aa6_eb47_1e69);
        assert_eq!(SKIP_TABLE[2], 0x785b_29c2_a7da_c711);
        assert_eq!(SKIP_TABLE[3], 0x5f7e_5273_d1bf_6f21);
        assert_eq!(SKIP_TABLE[15], 0x0daf_b7b8_e8d2_0001);
    }

    #[test]
    fn test_table_tail_collapses_to_one() {
        assert_eq!(SKIP_TABLE[60], 0x4000_0000_0000_0001);
        assert_eq!(SKIP_TABLE[61], 0x8000_0000_0000_0001);
        assert_eq!(SKIP_TABLE[62], 1);
        assert_eq!(SKIP_TABLE[63], 1);
    }

    #[test]
    fn test_entries_are_successive_squares() {
        for i in 1..64 {
            assert_eq!(
                SKIP_TABLE[i],
                SKIP_TABLE[i - 1].wrapping_mul(SKIP_TABLE[i - 1]),
                "entry {} is not the square of entry {}",
                i,
                i - 1
            );
        }
    }

    #[test]
    fn test_jump_multiplier_small_powers() {
        assert_eq!(jump_multiplier(0), 1);
        assert_eq!(jump_multiplier(1), SCG_MULTIPLIER_X);

        let mut power = 1u64;
        for n in 0..50u64 {
            assert_eq!(jump_multiplier(n), power, "Mx^{} mismatch", n);
            power = power.wrapping_mul(SCG_MULTIPLIER_X);
        }
    }
}
