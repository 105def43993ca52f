//! Procedural water volume meshes.
//!
//! A water volume is a [`ShapeDescriptor`] (a box, or a union of boxes) rasterized into a fixed
//! `100 x 50 x 100` [`VoxelGrid`], then compiled into a quad mesh covering only the exposed faces of the water: the
//! surface on top and, optionally, the four side walls. Vertex colors carry a foam mask for the water shader and UVs
//! are world-space so that neighbouring volumes tile seamlessly. See the [`geometry`] module for the exact layout.
//!
//! The same grid answers height queries, so gameplay can float things on the surface.
//!
//! Nothing here fails: tile sizes, dimensions and placements are clamped to the grid, and queries outside of it simply
//! find no water.
//!
//! # Example Code
//!
//! ```
//! use water_volume_mesh::{FaceFlags, Placement, ShapeDescriptor, VolumeConfig, WaterVolume};
//!
//! let config = VolumeConfig::new(1.0, FaceFlags::ALL, FaceFlags::NEG_X | FaceFlags::POS_X);
//! let mut volume = WaterVolume::new(
//!     config,
//!     ShapeDescriptor::Transforms(vec![
//!         Placement::new([0.0, 0.0, 0.0], [4.0, 2.0, 4.0]),
//!         Placement::new([4.0, 0.0, 1.0], [3.0, 1.0, 2.0]),
//!     ]),
//! )
//! .with_origin([10.0, 0.0, 10.0]);
//!
//! // Rebuilds on demand, since the volume starts dirty.
//! let mesh = volume.mesh();
//! assert!(mesh.num_quads() > 0);
//! assert_eq!(mesh.indices.len() % 6, 0);
//!
//! // The highest tile of the first placement is at y = 1.
//! assert_eq!(volume.query_height([11.5, 0.0, 11.5]), Some(1.0));
//! assert_eq!(volume.query_height([0.0, 0.0, 0.0]), None);
//! ```
//!
//! Lower-level pieces can be used on their own:
//!
//! ```
//! use water_volume_mesh::{compile_water_mesh, sample_height, VolumeConfig, VoxelGrid, WaterMeshBuffer};
//!
//! let mut grid = VoxelGrid::new();
//! grid.set([5, 3, 5], true);
//!
//! let mut buffer = WaterMeshBuffer::new();
//! compile_water_mesh(&grid, &VolumeConfig::default(), [0.0; 3], &mut buffer);
//!
//! // A lone tile: its top face and four sides.
//! assert_eq!(buffer.num_quads(), 5);
//! assert_eq!(sample_height(&grid, [0.0; 3], 1.0, [5.5, 0.0, 5.5]), Some(3.0));
//! ```

mod bounds;
mod buffer;
mod compile;
mod config;
pub mod geometry;
mod grid;
mod height;
mod shape;
mod volume;
pub mod waves;

pub use bounds::{grid_extent, GRID_SHAPE};
pub use buffer::*;
pub use compile::*;
pub use config::*;
#[doc(inline)]
pub use geometry::*;
pub use grid::*;
pub use height::*;
pub use shape::*;
pub use volume::*;
pub use waves::{float_position, surface_height, WaveParams};

pub use ilattice;
pub use ndshape;
