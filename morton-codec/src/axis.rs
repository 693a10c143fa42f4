use crate::table;

/// One of the three coordinate axes of the interleave.
///
/// The discriminant is the bit offset of the axis inside a Morton code:
/// x occupies every third bit starting at position 0, y at 1, z at 2. The
/// relative order of the axes is arbitrary in principle, but it fixes the
/// spatial traversal order of the octree, so it is hardcoded here once and
/// for all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// Bit offset of this axis's stream inside a Morton code.
    pub const fn offset(self) -> u32 {
        self as u32
    }

    /// The spread table pre-shifted for this axis.
    pub(crate) fn spread_table(self) -> &'static [u32; 256] {
        match self {
            Axis::X => &table::X_SPREAD,
            Axis::Y => &table::Y_SPREAD,
            Axis::Z => &table::Z_SPREAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_zyx_priority() {
        assert_eq!(Axis::X.offset(), 0);
        assert_eq!(Axis::Y.offset(), 1);
        assert_eq!(Axis::Z.offset(), 2);
    }

    #[test]
    fn spread_table_lowest_bit_matches_offset() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(axis.spread_table()[1], 1 << axis.offset());
        }
    }
}
