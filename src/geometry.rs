//! Water tile geometry.
//!
//! # Tiles and Faces
//!
//! Every occupied cell of a [`VoxelGrid`](crate::VoxelGrid) is a cubic **tile** with edge length `tile_size`. Tile
//! `(x, y, z)` spans `[x, x + 1] * tile_size` (and likewise for Y and Z) in the volume's local space, so a placement's
//! position is the minimum corner of the tiles it covers.
//!
//! ```text
//!          top (+Y)
//!     O--------O
//!   / |      / |
//! O--------O   |   -X, +X, -Z, +Z: side faces
//! |   |    |   |
//! |   O----|---O
//! | /      | /
//! O--------O
//!       (no bottom face)
//! ```
//!
//! A water surface only ever needs five of the six cube faces: the **top** face (the surface itself) and the four
//! horizontal **side** faces. Bottom faces are never emitted.
//!
//! Coordinates are right-handed with +Y up, and every quad is wound counter-clockwise when seen from outside, i.e. the
//! cross product of its first two triangle edges points along its normal.
//!
//! # Foam
//!
//! Each vertex carries a color used as a mask by the water shader: [`FOAM_COLOR`] where the surface meets an exposed edge,
//! [`CLEAR_COLOR`] elsewhere. The top face marks a corner when either of its two side edges is exposed and foamed, or
//! when the diagonal cell is empty while both side neighbours are water (an inner corner). Side faces mark their two
//! upper vertices when the tile is at the surface.
//!
//! # UVs
//!
//! Texture coordinates are world-space positions projected onto the face plane. They are not normalized, so adjacent
//! volumes with the same tile size continue the same texture without a seam.

mod axis;
mod face;
mod quad;

pub use axis::*;
pub use face::*;
pub use quad::*;

/// Vertex color of a foamed vertex.
pub const FOAM_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Vertex color of a vertex without foam.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Maps a foam marker to its vertex color.
#[inline]
pub fn foam_color(foam: bool) -> [f32; 4] {
    if foam {
        FOAM_COLOR
    } else {
        CLEAR_COLOR
    }
}
