use glam::UVec3;

use crate::axis::Axis;

/// Number of significant bits in a coordinate component. Three 21-bit
/// components fill the low 63 bits of a 64-bit code.
pub const COORDINATE_BITS: u32 = 21;

/// Largest coordinate component that encodes without aliasing.
pub const MAX_COORDINATE: u32 = (1 << COORDINATE_BITS) - 1;

/// Interleaves one coordinate component into the bit positions owned by
/// `axis`.
///
/// The component is consumed a byte at a time: each byte's spread pattern
/// comes from the axis's precomputed table, and the three partial words land
/// at bit 0, 24 and 48. Components above [`MAX_COORDINATE`] are not rejected;
/// their high bits alias into the code (debug builds assert the precondition,
/// release builds stay silent).
pub fn encode_axis(axis: Axis, value: u32) -> u64 {
    debug_assert!(
        value <= MAX_COORDINATE,
        "coordinate component {value:#x} exceeds {COORDINATE_BITS} bits"
    );

    let table = axis.spread_table();

    let low = value & 0xFF;
    let middle = value >> 8 & 0xFF;
    let high = value >> 16 & 0xFF;

    (table[high as usize] as u64) << 48
        | (table[middle as usize] as u64) << 24
        | table[low as usize] as u64
}

/// Computes the Morton code of a coordinate triple.
///
/// Pure and O(1): nine table lookups ORed together. Injective as long as
/// every component is at most [`MAX_COORDINATE`].
pub fn encode(x: u32, y: u32, z: u32) -> u64 {
    encode_axis(Axis::X, x) | encode_axis(Axis::Y, y) | encode_axis(Axis::Z, z)
}

/// Extracts one coordinate component from a Morton code.
///
/// Shifts the axis's stream down to bit 0, then collapses the every-third-bit
/// pattern with the inverse butterfly. Total function: any 64-bit input
/// decodes to some triple.
pub fn decode_axis(axis: Axis, code: u64) -> u32 {
    let mut n = code >> axis.offset();

    n &= 0x9249249249249249;
    n = (n | n >> 2) & 0x30C30C30C30C30C3;
    n = (n | n >> 4) & 0xF00F00F00F00F00F;
    n = (n | n >> 8) & 0x00FF0000FF0000FF;
    n = (n | n >> 16) & 0xFFFF00000000FFFF;
    n = (n | n >> 32) & 0x00000000FFFFFFFF;

    n as u32
}

/// Inverts [`encode`]: `decode(encode(x, y, z)) == (x, y, z)` whenever every
/// component is at most [`MAX_COORDINATE`].
pub fn decode(code: u64) -> (u32, u32, u32) {
    (
        decode_axis(Axis::X, code),
        decode_axis(Axis::Y, code),
        decode_axis(Axis::Z, code),
    )
}

/// [`encode`] over a geometry vector.
pub fn encode_vec(v: UVec3) -> u64 {
    encode(v.x, v.y, v.z)
}

/// [`decode`] into a geometry vector.
pub fn decode_vec(code: u64) -> UVec3 {
    let (x, y, z) = decode(code);
    UVec3::new(x, y, z)
}
