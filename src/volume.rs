use crate::{
    compile_water_mesh, sample_height, FaceFlags, Placement, ShapeDescriptor, VolumeConfig, VoxelGrid,
    WaterMeshBuffer,
};

/// A water volume: a shape, a configuration and a world origin, plus the grid and mesh last built from them.
///
/// Every setter marks the volume dirty. Nothing is rebuilt implicitly except by [`WaterVolume::mesh`], which rebuilds a
/// dirty volume before returning its buffers; hosts decide when to call [`WaterVolume::update`] or
/// [`WaterVolume::rebuild`].
#[derive(Clone, Debug)]
pub struct WaterVolume {
    config: VolumeConfig,
    shape: ShapeDescriptor,
    origin: [f32; 3],
    grid: Option<VoxelGrid>,
    mesh: WaterMeshBuffer,
    dirty: bool,
}

impl Default for WaterVolume {
    fn default() -> Self {
        Self::new(VolumeConfig::default(), ShapeDescriptor::default())
    }
}

impl WaterVolume {
    /// A dirty volume at the world origin. Nothing is built until the first rebuild.
    pub fn new(config: VolumeConfig, shape: ShapeDescriptor) -> Self {
        Self {
            config: config.validated(),
            shape,
            origin: [0.0; 3],
            grid: None,
            mesh: WaterMeshBuffer::new(),
            dirty: true,
        }
    }

    pub fn with_origin(mut self, origin: [f32; 3]) -> Self {
        self.set_origin(origin);
        self
    }

    #[inline]
    pub fn config(&self) -> &VolumeConfig {
        &self.config
    }

    #[inline]
    pub fn shape(&self) -> &ShapeDescriptor {
        &self.shape
    }

    #[inline]
    pub fn origin(&self) -> [f32; 3] {
        self.origin
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forces the next [`update`](Self::update) or [`mesh`](Self::mesh) to rebuild.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn set_config(&mut self, config: VolumeConfig) {
        self.config = config.validated();
        self.dirty = true;
    }

    pub fn set_tile_size(&mut self, tile_size: f32) {
        self.config.set_tile_size(tile_size);
        self.dirty = true;
    }

    pub fn set_include_faces(&mut self, include_faces: FaceFlags) {
        self.config.include_faces = include_faces;
        self.dirty = true;
    }

    pub fn set_include_foam(&mut self, include_foam: FaceFlags) {
        self.config.include_foam = include_foam;
        self.dirty = true;
    }

    pub fn set_realtime_updates(&mut self, realtime_updates: bool) {
        self.config.realtime_updates = realtime_updates;
    }

    /// Moves the volume. UVs are world-space, so this needs a rebuild too.
    pub fn set_origin(&mut self, origin: [f32; 3]) {
        self.origin = origin;
        self.dirty = true;
    }

    pub fn set_shape(&mut self, shape: ShapeDescriptor) {
        self.shape = shape;
        self.dirty = true;
    }

    /// Edits the shape in place and marks the volume dirty.
    pub fn edit_shape<R>(&mut self, edit: impl FnOnce(&mut ShapeDescriptor) -> R) -> R {
        self.dirty = true;
        edit(&mut self.shape)
    }

    /// Adds a placement. A box volume becomes a transform set holding just this placement.
    pub fn push_placement(&mut self, placement: Placement) {
        self.edit_shape(|shape| {
            if let ShapeDescriptor::Transforms(placements) = shape {
                placements.push(placement);
            } else {
                *shape = ShapeDescriptor::Transforms(vec![placement]);
            }
        })
    }

    /// Replaces placement `index`. Returns `false` (and changes nothing) if there is no such placement.
    pub fn set_placement(&mut self, index: usize, placement: Placement) -> bool {
        match &mut self.shape {
            ShapeDescriptor::Transforms(placements) if index < placements.len() => {
                placements[index] = placement;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Removes placement `index`, if there is one.
    pub fn remove_placement(&mut self, index: usize) -> Option<Placement> {
        match &mut self.shape {
            ShapeDescriptor::Transforms(placements) if index < placements.len() => {
                self.dirty = true;
                Some(placements.remove(index))
            }
            _ => None,
        }
    }

    /// Repopulates a fresh grid from the shape and recompiles the mesh, replacing both wholesale.
    pub fn rebuild(&mut self) -> &WaterMeshBuffer {
        let tile_size = self.config.tile_size();
        log::trace!(
            "rebuilding {} water volume (tile size {tile_size})",
            self.shape.kind()
        );

        let mut grid = VoxelGrid::new();
        self.shape.populate(&mut grid, tile_size);
        compile_water_mesh(&grid, &self.config, self.origin, &mut self.mesh);

        log::debug!(
            "water volume rebuilt: {} tiles, {} quads, {} vertices",
            grid.num_occupied(),
            self.mesh.num_quads(),
            self.mesh.num_vertices()
        );

        self.grid = Some(grid);
        self.dirty = false;
        &self.mesh
    }

    /// Per-tick hook. Rebuilds if dirty, or on every call while `realtime_updates` is set and the host is not
    /// `simulating`. Returns whether a rebuild happened.
    pub fn update(&mut self, simulating: bool) -> bool {
        if self.dirty || (!simulating && self.config.realtime_updates) {
            self.rebuild();
            true
        } else {
            false
        }
    }

    /// The current mesh, rebuilt first if anything changed since the last build.
    pub fn mesh(&mut self) -> &WaterMeshBuffer {
        if self.dirty {
            self.rebuild();
        }
        &self.mesh
    }

    /// The last built mesh, which may be stale if [`is_dirty`](Self::is_dirty).
    #[inline]
    pub fn last_mesh(&self) -> &WaterMeshBuffer {
        &self.mesh
    }

    /// The last built grid, if the volume was ever built.
    #[inline]
    pub fn grid(&self) -> Option<&VoxelGrid> {
        self.grid.as_ref()
    }

    /// World-space height of the water surface tile under `position`, against the last built grid.
    ///
    /// Returns `None` outside the grid, over an empty column, or before the first build.
    pub fn query_height(&self, position: [f32; 3]) -> Option<f32> {
        let grid = self.grid.as_ref()?;
        sample_height(grid, self.origin, self.config.tile_size(), position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_volume(dimensions: [f32; 3]) -> WaterVolume {
        WaterVolume::new(VolumeConfig::default(), ShapeDescriptor::Box { dimensions })
    }

    #[test]
    fn new_volume_is_dirty_until_built() {
        let mut volume = box_volume([2.0, 1.0, 2.0]);
        assert!(volume.is_dirty());
        assert!(volume.grid().is_none());
        assert_eq!(volume.query_height([0.5, 0.0, 0.5]), None);
        assert!(volume.last_mesh().is_empty());

        let quads = volume.mesh().num_quads();
        // 4 tops + 8 sides
        assert_eq!(quads, 12);
        assert!(!volume.is_dirty());
        assert_eq!(volume.query_height([0.5, 0.0, 0.5]), Some(0.0));
    }

    #[test]
    fn update_only_rebuilds_when_needed() {
        let mut volume = box_volume([1.0; 3]);
        assert!(volume.update(false));
        assert!(!volume.update(false));
        assert!(!volume.update(true));

        volume.set_include_faces(FaceFlags::NONE);
        assert!(volume.is_dirty());
        assert!(volume.update(true));
        assert_eq!(volume.last_mesh().num_quads(), 1);
    }

    #[test]
    fn realtime_updates_rebuild_outside_simulation() {
        let mut volume = box_volume([1.0; 3]);
        volume.set_realtime_updates(true);
        assert!(volume.update(true));
        assert!(volume.update(false));
        assert!(volume.update(false));
        assert!(!volume.update(true));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut volume = box_volume([3.0, 2.0, 4.0]).with_origin([1.5, 0.0, -2.0]);
        let first = volume.rebuild().clone();
        let second = volume.rebuild().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn placement_edits_mark_dirty_and_rebuild_before_read() {
        let mut volume = WaterVolume::new(
            VolumeConfig::default(),
            ShapeDescriptor::Transforms(vec![Placement::new([0.0; 3], [1.0; 3])]),
        );
        assert_eq!(volume.mesh().num_quads(), 5);
        assert_eq!(volume.query_height([0.5, 0.0, 0.5]), Some(0.0));

        assert!(volume.set_placement(0, Placement::new([4.0, 2.0, 4.0], [1.0; 3])));
        assert!(volume.is_dirty());
        assert_eq!(volume.mesh().num_quads(), 5);
        assert_eq!(volume.query_height([0.5, 0.0, 0.5]), None);
        assert_eq!(volume.query_height([4.5, 0.0, 4.5]), Some(2.0));

        volume.push_placement(Placement::new([5.0, 2.0, 4.0], [1.0; 3]));
        assert!(volume.is_dirty());
        assert_eq!(volume.mesh().num_quads(), 8);

        assert_eq!(
            volume.remove_placement(0),
            Some(Placement::new([4.0, 2.0, 4.0], [1.0; 3]))
        );
        assert!(volume.is_dirty());
        assert_eq!(volume.mesh().num_quads(), 5);

        assert!(!volume.set_placement(7, Placement::default()));
        assert_eq!(volume.remove_placement(7), None);
        assert!(!volume.is_dirty());
    }

    #[test]
    fn pushing_onto_a_box_switches_to_transforms() {
        let mut volume = box_volume([5.0; 3]);
        volume.push_placement(Placement::new([0.0; 3], [1.0; 3]));
        assert_eq!(
            volume.shape(),
            &ShapeDescriptor::Transforms(vec![Placement::new([0.0; 3], [1.0; 3])])
        );
    }

    #[test]
    fn moving_the_origin_moves_the_uvs() {
        let mut volume = box_volume([1.0; 3]);
        let uv = volume.mesh().tex_coords[0];
        volume.set_origin([1.0, 0.0, 0.0]);
        assert!(volume.is_dirty());
        let moved = volume.mesh().tex_coords[0];
        assert_eq!(moved, [uv[0] + 1.0, uv[1]]);
        // Positions stay local.
        assert_eq!(volume.mesh().positions[0], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn height_query_uses_origin_and_tile_size() {
        let mut volume = box_volume([4.0, 3.0, 4.0]).with_origin([10.0, 1.0, 10.0]);
        volume.set_tile_size(2.0);
        volume.rebuild();
        // 2 x 2 x 2 tiles of size 2 (3 / 2 rounds to 2).
        assert_eq!(volume.query_height([11.0, 0.0, 13.0]), Some(1.0 + 1.0 * 2.0));
        assert_eq!(volume.query_height([15.0, 0.0, 10.0]), None);
    }

    #[test]
    fn tile_size_is_clamped() {
        let mut volume = WaterVolume::default();
        volume.set_tile_size(0.0);
        assert_eq!(volume.config().tile_size(), crate::MIN_TILE_SIZE);
    }
}
