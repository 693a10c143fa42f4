//! Precomputed bit-spread lookup tables.
//!
//! Interleaving is done byte-wise through a 256-entry table rather than by
//! running the butterfly stages on every call. This wins when many codes are
//! computed in Morton order, as the table stays hot in cache. Each axis gets
//! its own table variant, pre-shifted by the axis bit offset, so encoding a
//! byte costs one lookup and no shift beyond byte alignment.

/// Spreads the 8 bits of `byte` three positions apart, into bits
/// 0, 3, 6, ..., 21 of the result.
const fn spread(byte: u8) -> u32 {
    let mut x = byte as u32;
    x = (x | x << 16) & 0xFF0000FF;
    x = (x | x << 8) & 0x0F00F00F;
    x = (x | x << 4) & 0xC30C30C3;
    x = (x | x << 2) & 0x49249249;
    x
}

const fn build_table(offset: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = spread(i as u8) << offset;
        i += 1;
    }
    table
}

// Computed at compile time; immutable for the life of the process, so
// concurrent readers need no synchronization.
pub(crate) static X_SPREAD: [u32; 256] = build_table(0);
pub(crate) static Y_SPREAD: [u32; 256] = build_table(1);
pub(crate) static Z_SPREAD: [u32; 256] = build_table(2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_leaves_two_zero_bits_after_each_bit() {
        for b in 0..=255u32 {
            let s = spread(b as u8);
            for i in 0..8 {
                assert_eq!(s >> (3 * i) & 1, b >> i & 1);
            }
            // No bits outside the spread pattern.
            assert_eq!(s & !0x49249249, 0);
        }
    }

    #[test]
    fn spread_of_full_byte_fills_the_pattern() {
        assert_eq!(spread(0xFF), 0x49249249 & ((1 << 22) - 1));
    }

    #[test]
    fn axis_tables_are_shifted_copies() {
        for i in 0..256 {
            assert_eq!(Y_SPREAD[i], X_SPREAD[i] << 1);
            assert_eq!(Z_SPREAD[i], X_SPREAD[i] << 2);
        }
    }
}
