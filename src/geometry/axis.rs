use crate::FaceFlags;

use ilattice::glam::IVec3;

/// Either the X, Y, or Z axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    #[inline]
    pub const fn get_unit_vector(&self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }
}

/// Either the -X, +X, -Y, +Y, -Z, or +Z axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum SignedAxis {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

impl SignedAxis {
    pub const ALL: [SignedAxis; 6] = [
        SignedAxis::NegX,
        SignedAxis::PosX,
        SignedAxis::NegY,
        SignedAxis::PosY,
        SignedAxis::NegZ,
        SignedAxis::PosZ,
    ];

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[inline]
    pub fn unsigned_axis(&self) -> Axis {
        match self {
            Self::NegX | Self::PosX => Axis::X,
            Self::NegY | Self::PosY => Axis::Y,
            Self::NegZ | Self::PosZ => Axis::Z,
        }
    }

    #[inline]
    pub fn signum(&self) -> i32 {
        match self {
            Self::NegX | Self::NegY | Self::NegZ => -1,
            Self::PosX | Self::PosY | Self::PosZ => 1,
        }
    }

    #[inline]
    pub fn get_unit_vector(&self) -> IVec3 {
        self.unsigned_axis().get_unit_vector() * self.signum()
    }

    /// The matching side direction, if this is a horizontal axis.
    #[inline]
    pub fn side_flag(&self) -> FaceFlags {
        match self {
            Self::NegX => FaceFlags::NEG_X,
            Self::PosX => FaceFlags::POS_X,
            Self::NegZ => FaceFlags::NEG_Z,
            Self::PosZ => FaceFlags::POS_Z,
            Self::NegY | Self::PosY => FaceFlags::NONE,
        }
    }
}
