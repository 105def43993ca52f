use crate::{FaceFlags, SignedAxis};

use ilattice::glam::{IVec3, Vec3};

/// One of the five faces a water tile can emit. Bottom faces are never part of a water mesh.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WaterFace {
    Top,
    NegX,
    PosX,
    NegZ,
    PosZ,
}

impl WaterFace {
    /// Faces in the order they are emitted for a single tile.
    pub const ALL: [WaterFace; 5] = [
        WaterFace::Top,
        WaterFace::NegX,
        WaterFace::PosX,
        WaterFace::NegZ,
        WaterFace::PosZ,
    ];

    pub const SIDES: [WaterFace; 4] = [
        WaterFace::NegX,
        WaterFace::PosX,
        WaterFace::NegZ,
        WaterFace::PosZ,
    ];

    #[inline]
    pub fn normal(&self) -> SignedAxis {
        match self {
            Self::Top => SignedAxis::PosY,
            Self::NegX => SignedAxis::NegX,
            Self::PosX => SignedAxis::PosX,
            Self::NegZ => SignedAxis::NegZ,
            Self::PosZ => SignedAxis::PosZ,
        }
    }

    /// The include/foam flag for a side face; empty for the top face.
    #[inline]
    pub fn flag(&self) -> FaceFlags {
        self.normal().side_flag()
    }

    /// Lattice corners of this face on the tile with minimum corner `cell`.
    ///
    /// The top face is listed `(-X-Z), (-X+Z), (+X+Z), (+X-Z)`. Side faces are listed bottom, top, top, bottom so that
    /// vertices 1 and 2 are always on the upper edge. Every face is counter-clockwise when seen from outside.
    ///
    /// ```text
    ///   top (looking down -Y)         side (looking at its normal)
    ///
    ///   +Z                            +Y
    ///   ^  1 ------- 2                ^  1 ------- 2
    ///   |  |         |                |  |         |
    ///   |  |         |                |  |         |
    ///   |  0 ------- 3                |  0 ------- 3
    ///    ----------> +X                ------------>
    /// ```
    #[inline]
    pub fn quad_corners(&self, cell: IVec3) -> [IVec3; 4] {
        let c = |x: i32, y: i32, z: i32| cell + IVec3::new(x, y, z);
        match self {
            Self::Top => [c(0, 1, 0), c(0, 1, 1), c(1, 1, 1), c(1, 1, 0)],
            Self::NegX => [c(0, 0, 1), c(0, 1, 1), c(0, 1, 0), c(0, 0, 0)],
            Self::PosX => [c(1, 0, 0), c(1, 1, 0), c(1, 1, 1), c(1, 0, 1)],
            Self::NegZ => [c(0, 0, 0), c(0, 1, 0), c(1, 1, 0), c(1, 0, 0)],
            Self::PosZ => [c(1, 0, 1), c(1, 1, 1), c(0, 1, 1), c(0, 0, 1)],
        }
    }

    /// Local-space vertex positions for this face of `cell`.
    #[inline]
    pub fn quad_mesh_positions(&self, cell: IVec3, tile_size: f32) -> [[f32; 3]; 4] {
        self.quad_corners(cell)
            .map(|c| (tile_size * c.as_vec3()).to_array())
    }

    #[inline]
    pub fn quad_mesh_normals(&self) -> [[f32; 3]; 4] {
        [self.normal().get_unit_vector().as_vec3().to_array(); 4]
    }

    /// Texture coordinates for local `positions` of this face, taken from world space so that neighbouring volumes tile
    /// seamlessly. The top face maps `(x, z)`, X faces map `(z, y)`, Z faces map `(x, y)`.
    #[inline]
    pub fn tex_coords(&self, positions: &[[f32; 3]; 4], origin: [f32; 3]) -> [[f32; 2]; 4] {
        let origin = Vec3::from(origin);
        positions.map(|p| {
            let w = Vec3::from(p) + origin;
            match self {
                Self::Top => [w.x, w.z],
                Self::NegX | Self::PosX => [w.z, w.y],
                Self::NegZ | Self::PosZ => [w.x, w.y],
            }
        })
    }
}
