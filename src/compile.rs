use crate::{FaceFlags, QuadSplit, SignedAxis, TopCorner, VolumeConfig, VoxelGrid, WaterFace, WaterMeshBuffer};

use ilattice::glam::IVec3;

/// Which cells around a tile are free of water. Cells outside the grid are always free.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Neighborhood {
    /// Indexed by [`SignedAxis`].
    exposed: [bool; 6],
    /// Indexed by [`TopCorner`]. The diagonal cell is free while both side neighbours touching it are water.
    inner_corners: [bool; 4],
}

impl Neighborhood {
    fn sample(grid: &VoxelGrid, p: IVec3) -> Self {
        let exposed = SignedAxis::ALL.map(|axis| !grid.get_ivec(p + axis.get_unit_vector()));
        let inner_corners = TopCorner::ALL.map(|corner| {
            let (side_x, side_z) = corner_sides(corner);
            let [dx, dz] = corner.offset();
            !exposed[side_x.index()]
                && !exposed[side_z.index()]
                && !grid.get_ivec(p + IVec3::new(dx, 0, dz))
        });

        Self {
            exposed,
            inner_corners,
        }
    }

    #[inline]
    fn exposed(&self, axis: SignedAxis) -> bool {
        self.exposed[axis.index()]
    }
}

/// The two side directions meeting at `corner`.
#[inline]
fn corner_sides(corner: TopCorner) -> (SignedAxis, SignedAxis) {
    match corner {
        TopCorner::NegXNegZ => (SignedAxis::NegX, SignedAxis::NegZ),
        TopCorner::NegXPosZ => (SignedAxis::NegX, SignedAxis::PosZ),
        TopCorner::PosXPosZ => (SignedAxis::PosX, SignedAxis::PosZ),
        TopCorner::PosXNegZ => (SignedAxis::PosX, SignedAxis::NegZ),
    }
}

fn top_face_foam(neighborhood: &Neighborhood, include_foam: FaceFlags) -> [bool; 4] {
    let edge = |side: SignedAxis| neighborhood.exposed(side) && include_foam.contains(side.side_flag());

    TopCorner::ALL.map(|corner| {
        let (side_x, side_z) = corner_sides(corner);
        let inner = neighborhood.inner_corners[corner.index()]
            && include_foam.intersects(side_x.side_flag() | side_z.side_flag());
        edge(side_x) || edge(side_z) || inner
    })
}

/// Builds the water surface for every occupied tile of `grid`, replacing the contents of `output`.
///
/// For each tile:
/// - the top face is emitted whenever the cell above is free, regardless of `config.include_faces`
/// - a side face is emitted when the neighbour on that side is free and the side is in `config.include_faces`
/// - bottom faces are never emitted
///
/// Foam markers follow `config.include_foam` as described in the [`geometry`](crate::geometry) module. An empty grid
/// produces an empty buffer.
pub fn compile_water_mesh(
    grid: &VoxelGrid,
    config: &VolumeConfig,
    origin: [f32; 3],
    output: &mut WaterMeshBuffer,
) {
    output.reset();

    let tile_size = config.tile_size();

    for cell in grid.occupied_cells() {
        let neighborhood = Neighborhood::sample(grid, cell);
        let at_surface = neighborhood.exposed(SignedAxis::PosY);

        if at_surface {
            let foam = top_face_foam(&neighborhood, config.include_foam);
            output.push_face(
                WaterFace::Top,
                cell,
                tile_size,
                origin,
                foam,
                QuadSplit::for_foam(foam),
            );
        }

        for face in WaterFace::SIDES {
            if !neighborhood.exposed(face.normal()) || !config.include_faces.contains(face.flag()) {
                continue;
            }
            let waterline = at_surface && config.include_foam.contains(face.flag());
            output.push_face(
                face,
                cell,
                tile_size,
                origin,
                [false, waterline, waterline, false],
                QuadSplit::Default,
            );
        }
    }
}
