use crate::{foam_color, quad_indices, QuadSplit, WaterFace};

use ilattice::glam::IVec3;

/// The output of [`compile_water_mesh`](crate::compile_water_mesh): parallel per-vertex arrays plus a triangle list.
///
/// Every face appends four vertices and six indices, so all per-vertex arrays always have the same length and
/// `indices.len()` is a multiple of 6. This buffer can be reused between compilations to avoid reallocations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaterMeshBuffer {
    /// Local-space positions.
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// World-space texture coordinates.
    pub tex_coords: Vec<[f32; 2]>,
    /// Foam mask, see [`FOAM_COLOR`](crate::FOAM_COLOR).
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl WaterMeshBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the buffer.
    pub fn reset(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.colors.clear();
        self.indices.clear();
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns the total count of quads.
    pub fn num_quads(&self) -> usize {
        self.indices.len() / 6
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends one face of `cell` with the given per-vertex foam markers.
    pub(crate) fn push_face(
        &mut self,
        face: WaterFace,
        cell: IVec3,
        tile_size: f32,
        origin: [f32; 3],
        foam: [bool; 4],
        split: QuadSplit,
    ) {
        let start = self.positions.len() as u32;
        let positions = face.quad_mesh_positions(cell, tile_size);

        self.indices.extend_from_slice(&quad_indices(start, split));
        self.tex_coords
            .extend_from_slice(&face.tex_coords(&positions, origin));
        self.positions.extend_from_slice(&positions);
        self.normals.extend_from_slice(&face.quad_mesh_normals());
        self.colors.extend_from_slice(&foam.map(foam_color));

        debug_assert_eq!(self.positions.len(), self.normals.len());
        debug_assert_eq!(self.positions.len(), self.tex_coords.len());
        debug_assert_eq!(self.positions.len(), self.colors.len());
    }
}
