use crate::bounds::{clip_to_grid, in_grid};

use ilattice::glam::IVec3;
use ilattice::prelude::Extent;
use ndcopy::fill3;
use ndshape::{ConstShape, ConstShape3u32};

/// Maximum number of tiles along X.
pub const GRID_X: u32 = 100;
/// Maximum number of tiles along Y.
pub const GRID_Y: u32 = 50;
/// Maximum number of tiles along Z.
pub const GRID_Z: u32 = 100;

/// Linearizes `[x, y, z]` into `x + GRID_X * y + GRID_X * GRID_Y * z`.
pub type GridShape = ConstShape3u32<GRID_X, GRID_Y, GRID_Z>;

/// A dense, fixed-size occupancy grid. `true` cells contain water.
///
/// Coordinates outside of `[0, GRID_X) x [0, GRID_Y) x [0, GRID_Z)` are never occupied: reading them returns `false` and
/// writing them does nothing.
#[derive(Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    cells: Vec<bool>,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VoxelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelGrid")
            .field("shape", &[GRID_X, GRID_Y, GRID_Z])
            .field("occupied", &self.num_occupied())
            .finish()
    }
}

impl VoxelGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self {
            cells: vec![false; GridShape::SIZE as usize],
        }
    }

    #[inline]
    fn index(p: IVec3) -> Option<usize> {
        in_grid(p).then(|| GridShape::linearize(p.as_uvec3().to_array()) as usize)
    }

    #[inline]
    pub fn get(&self, p: [i32; 3]) -> bool {
        self.get_ivec(IVec3::from(p))
    }

    #[inline]
    pub fn get_ivec(&self, p: IVec3) -> bool {
        match Self::index(p) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    #[inline]
    pub fn set(&mut self, p: [i32; 3], value: bool) {
        if let Some(i) = Self::index(IVec3::from(p)) {
            self.cells[i] = value;
        }
    }

    /// Sets every cell of `extent` that lies inside the grid. Returns the number of cells written.
    pub fn fill(&mut self, extent: Extent<IVec3>, value: bool) -> usize {
        let Some(clipped) = clip_to_grid(extent) else {
            return 0;
        };
        let shape = clipped.shape.as_uvec3();
        fill3(
            shape.to_array(),
            value,
            &mut self.cells,
            &GridShape {},
            clipped.minimum.as_uvec3().to_array(),
        );
        (shape.x * shape.y * shape.z) as usize
    }

    /// Marks every cell empty.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// The Y index of the highest occupied cell in column `(x, z)`.
    pub fn column_top(&self, x: i32, z: i32) -> Option<u32> {
        if !in_grid(IVec3::new(x, 0, z)) {
            return None;
        }
        (0..GRID_Y as i32)
            .rev()
            .find(|&y| self.get_ivec(IVec3::new(x, y, z)))
            .map(|y| y as u32)
    }

    pub fn num_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of every occupied cell, in linear index order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| IVec3::from(GridShape::delinearize(i as u32).map(|c| c as i32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_empty() {
        let mut grid = VoxelGrid::new();
        grid.fill(crate::bounds::grid_extent(), true);
        assert!(grid.get([0, 0, 0]));
        assert!(grid.get([99, 49, 99]));
        assert!(!grid.get([-1, 0, 0]));
        assert!(!grid.get([100, 0, 0]));
        assert!(!grid.get([0, 50, 0]));
        assert!(!grid.get([0, 0, 100]));
        assert!(!grid.get([i32::MIN, i32::MAX, 0]));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = VoxelGrid::new();
        let before = grid.clone();
        grid.set([-1, 0, 0], true);
        grid.set([100, 0, 0], true);
        grid.set([0, 50, 0], true);
        grid.set([0, 0, -7], true);
        assert_eq!(grid, before);
        assert!(grid.is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut grid = VoxelGrid::new();
        grid.set([5, 3, 5], true);
        assert!(grid.get([5, 3, 5]));
        assert!(!grid.get([5, 3, 6]));
        assert_eq!(grid.num_occupied(), 1);
        assert_eq!(grid.occupied_cells().collect::<Vec<_>>(), vec![IVec3::new(5, 3, 5)]);

        grid.set([5, 3, 5], false);
        assert!(grid.is_empty());
    }

    #[test]
    fn linear_layout_is_x_fastest() {
        assert_eq!(GridShape::linearize([1, 0, 0]), 1);
        assert_eq!(GridShape::linearize([0, 1, 0]), GRID_X);
        assert_eq!(GridShape::linearize([0, 0, 1]), GRID_X * GRID_Y);
    }

    #[test]
    fn fill_is_clipped_to_grid() {
        let mut grid = VoxelGrid::new();
        let extent = Extent::from_min_and_shape(IVec3::new(98, -1, 0), IVec3::new(5, 2, 1));
        assert_eq!(grid.fill(extent, true), 2);
        assert!(grid.get([98, 0, 0]));
        assert!(grid.get([99, 0, 0]));
        assert_eq!(grid.num_occupied(), 2);
    }

    #[test]
    fn column_top_finds_highest_cell() {
        let mut grid = VoxelGrid::new();
        grid.set([2, 1, 3], true);
        grid.set([2, 7, 3], true);
        assert_eq!(grid.column_top(2, 3), Some(7));
        assert_eq!(grid.column_top(3, 3), None);
        assert_eq!(grid.column_top(-1, 3), None);
        assert_eq!(grid.column_top(2, 100), None);
    }
}
