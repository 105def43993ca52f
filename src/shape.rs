use crate::bounds::GRID_SHAPE;
use crate::VoxelGrid;

use ilattice::glam::{IVec3, Vec3};
use ilattice::prelude::Extent;

/// One child box of a [`ShapeDescriptor::Transforms`] volume, in the volume's local space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Minimum corner of the box.
    pub position: [f32; 3],
    /// Size of the box.
    pub scale: [f32; 3],
}

impl Placement {
    pub fn new(position: [f32; 3], scale: [f32; 3]) -> Self {
        Self { position, scale }
    }

    /// The cells covered by this placement once snapped to a grid of `tile_size`. May lie partly or entirely outside the
    /// grid; negative extents are flattened to zero.
    pub fn voxel_extent(&self, tile_size: f32) -> Extent<IVec3> {
        let origin = snap(self.position, tile_size);
        let shape = snap(self.scale, tile_size).max(IVec3::ZERO);
        Extent::from_min_and_shape(origin, shape)
    }

    /// Local-space minimum corner and size of the snapped box.
    pub fn snapped_bounds(&self, tile_size: f32) -> ([f32; 3], [f32; 3]) {
        let extent = self.voxel_extent(tile_size);
        (
            (extent.minimum.as_vec3() * tile_size).to_array(),
            (extent.shape.as_vec3() * tile_size).to_array(),
        )
    }
}

/// The shape a water volume fills its grid with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeDescriptor {
    /// A box anchored at cell `(0, 0, 0)`, with `dimensions` in world units.
    Box { dimensions: [f32; 3] },
    /// A union of boxes.
    Transforms(Vec<Placement>),
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self::Box {
            dimensions: [1.0; 3],
        }
    }
}

impl ShapeDescriptor {
    /// Short name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Transforms(_) => "transforms",
        }
    }

    /// Marks the cells covered by this shape as occupied. Never fails: anything outside the grid is dropped.
    pub fn populate(&self, grid: &mut VoxelGrid, tile_size: f32) {
        match self {
            Self::Box { dimensions } => {
                grid.fill(box_extent(*dimensions, tile_size), true);
            }
            Self::Transforms(placements) => {
                for (i, placement) in placements.iter().enumerate() {
                    let extent = placement.voxel_extent(tile_size);
                    let wanted = extent.shape.x as i64 * extent.shape.y as i64 * extent.shape.z as i64;
                    let written = grid.fill(extent, true) as i64;
                    if written < wanted {
                        log::debug!(
                            "placement {i} truncated to grid: {written} of {wanted} cells filled"
                        );
                    }
                }
            }
        }
    }
}

/// Cell count per axis for a box of `dimensions`: `round(dimension / tile_size)` (halves to even) clamped to `[1, grid size]`.
pub fn box_voxel_counts(dimensions: [f32; 3], tile_size: f32) -> IVec3 {
    let counts = snap(dimensions, tile_size);
    let clamped = counts.clamp(IVec3::ONE, GRID_SHAPE);
    if clamped != counts {
        log::debug!("box of {counts:?} tiles clamped to {clamped:?}");
    }
    clamped
}

/// `round(v / tile_size)` per component. Exact halves round to even, so `0.5` tiles snaps to 0 and `2.5` to 2.
#[inline]
fn snap(v: [f32; 3], tile_size: f32) -> IVec3 {
    let tiles = (Vec3::from(v) / tile_size).to_array();
    Vec3::from(tiles.map(f32::round_ties_even)).as_ivec3()
}

fn box_extent(dimensions: [f32; 3], tile_size: f32) -> Extent<IVec3> {
    Extent::from_min_and_shape(IVec3::ZERO, box_voxel_counts(dimensions, tile_size))
}
