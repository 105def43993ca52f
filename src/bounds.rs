use crate::{GRID_X, GRID_Y, GRID_Z};

use ilattice::glam::IVec3;
use ilattice::prelude::Extent;

/// Number of cells along each axis of a [`VoxelGrid`](crate::VoxelGrid).
pub const GRID_SHAPE: IVec3 = ilattice::glam::const_ivec3!([GRID_X as i32, GRID_Y as i32, GRID_Z as i32]);

/// The extent covering every cell of a [`VoxelGrid`](crate::VoxelGrid).
#[inline]
pub fn grid_extent() -> Extent<IVec3> {
    Extent::from_min_and_shape(IVec3::ZERO, GRID_SHAPE)
}

#[inline]
pub fn in_grid(p: IVec3) -> bool {
    p.cmpge(IVec3::ZERO).all() && p.cmplt(GRID_SHAPE).all()
}

/// The part of `extent` that lies inside the grid, or `None` if nothing does.
pub fn clip_to_grid(extent: Extent<IVec3>) -> Option<Extent<IVec3>> {
    let [x, y, z] = extent.minimum.to_array();
    let [w, h, d] = extent.shape.to_array();
    // Snapped placements can sit near i32::MAX.
    let lub = IVec3::new(x.saturating_add(w), y.saturating_add(h), z.saturating_add(d));
    let minimum = extent.minimum.max(IVec3::ZERO);
    let lub = lub.min(GRID_SHAPE);
    let shape = lub - minimum;
    if shape.cmple(IVec3::ZERO).any() {
        return None;
    }
    Some(Extent::from_min_and_shape(minimum, shape))
}
