//! Morton (Z-order) encoding of 3D integer coordinates.
//!
//! Voxels in a linear octree are stored in an order equivalent to a pre-order
//! traversal of the tree, which spatially corresponds to the space-filling
//! Z-order curve. The Morton code of a coordinate vector is obtained by
//! interleaving the bits of its components: for x = xxxx, y = yyyy, z = zzzz
//! the code is zyxzyxzyxzyx. Codes that are close numerically are close
//! spatially, so sorting by code keeps nearby voxels contiguous in memory.
//!
//! The interleave order is hardcoded to ZYX; it determines the traversal
//! order of the octree and is not configurable.

mod axis;
mod codec;
mod table;

pub use axis::Axis;
pub use codec::{
    decode, decode_axis, decode_vec, encode, encode_axis, encode_vec, COORDINATE_BITS,
    MAX_COORDINATE,
};
