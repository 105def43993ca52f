/// A corner of a tile's top face, in the order the top face lists its vertices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum TopCorner {
    NegXNegZ = 0,
    NegXPosZ = 1,
    PosXPosZ = 2,
    PosXNegZ = 3,
}

impl TopCorner {
    pub const ALL: [TopCorner; 4] = [
        TopCorner::NegXNegZ,
        TopCorner::NegXPosZ,
        TopCorner::PosXPosZ,
        TopCorner::PosXNegZ,
    ];

    /// Index of this corner's vertex in the top face.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// `(dx, dz)` towards the corner from the tile center.
    #[inline]
    pub fn offset(&self) -> [i32; 2] {
        match self {
            Self::NegXNegZ => [-1, -1],
            Self::NegXPosZ => [-1, 1],
            Self::PosXPosZ => [1, 1],
            Self::PosXNegZ => [1, -1],
        }
    }
}

/// Which diagonal splits a quad into its two triangles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuadSplit {
    /// Triangles `(0, 1, 2)` and `(2, 3, 0)`, split along 0-2.
    Default,
    /// Triangles `(1, 2, 3)` and `(3, 0, 1)`, split along 1-3.
    Flipped,
}

impl QuadSplit {
    /// Picks the split for a top face from its per-corner foam markers.
    ///
    /// If either pair of opposite corners is fully foamed, the quad is split along the other diagonal so the mask blends
    /// across the whole face instead of pinching at the shared edge.
    #[inline]
    pub fn for_foam(foam: [bool; 4]) -> Self {
        if (foam[1] && foam[3]) || (foam[0] && foam[2]) {
            Self::Flipped
        } else {
            Self::Default
        }
    }
}

/// Returns the vertex indices for a single quad (two triangles), both counter-clockwise. `start` is the first index.
#[inline]
pub fn quad_indices(start: u32, split: QuadSplit) -> [u32; 6] {
    match split {
        QuadSplit::Default => [start, start + 1, start + 2, start + 2, start + 3, start],
        QuadSplit::Flipped => [start + 1, start + 2, start + 3, start + 3, start, start + 1],
    }
}
