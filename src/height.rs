use crate::{VoxelGrid, GRID_X, GRID_Z};

use ilattice::glam::Vec3;

/// Grid column `[x, z]` under a world position, or `None` if the position is outside the grid.
///
/// Tile `(x, z)` covers `[x, x + 1) * tile_size` relative to `origin`, so this is a plain `floor`.
pub fn column_at(origin: [f32; 3], tile_size: f32, position: [f32; 3]) -> Option<[i32; 2]> {
    let local = (Vec3::from(position) - Vec3::from(origin)) / tile_size;
    let x = local.x.floor();
    let z = local.z.floor();
    // NaN fails both comparisons.
    let in_range = |v: f32, max: u32| v >= 0.0 && v < max as f32;
    if !in_range(x, GRID_X) || !in_range(z, GRID_Z) {
        return None;
    }
    Some([x as i32, z as i32])
}

/// World-space Y of the highest water tile in the column under `position`; the Y component of `position` is ignored.
///
/// Returns `None` when the position is outside the grid or its column holds no water. Pure and bounded by the grid
/// height, so it can be called every frame.
pub fn sample_height(
    grid: &VoxelGrid,
    origin: [f32; 3],
    tile_size: f32,
    position: [f32; 3],
) -> Option<f32> {
    let [x, z] = column_at(origin, tile_size, position)?;
    let y = grid.column_top(x, z)?;
    Some(origin[1] + y as f32 * tile_size)
}
