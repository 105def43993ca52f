use std::ops::{BitAnd, BitOr};

/// Smallest tile edge length, in world units.
pub const MIN_TILE_SIZE: f32 = 0.1;
/// Largest tile edge length, in world units.
pub const MAX_TILE_SIZE: f32 = 100.0;
/// Tile size used when none (or a non-number) is given.
pub const DEFAULT_TILE_SIZE: f32 = 1.0;

/// A set of the four horizontal side directions of a tile.
///
/// Used twice by a [`VolumeConfig`]: once to select which side faces are emitted, and once to select which exposed edges
/// are marked with foam.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct FaceFlags(u8);

impl FaceFlags {
    pub const NONE: Self = Self(0);
    pub const NEG_X: Self = Self(1);
    pub const POS_X: Self = Self(2);
    pub const NEG_Z: Self = Self(4);
    pub const POS_Z: Self = Self(8);
    pub const ALL: Self = Self(0b1111);

    /// Keeps only the four known direction bits.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True iff every direction in `other` is also in `self`.
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True iff `self` and `other` share at least one direction.
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl Default for FaceFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// Unknown bits are dropped.
impl From<u8> for FaceFlags {
    #[inline]
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl From<FaceFlags> for u8 {
    #[inline]
    fn from(flags: FaceFlags) -> Self {
        flags.0
    }
}

impl BitOr for FaceFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for FaceFlags {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Clamps a tile size into `[MIN_TILE_SIZE, MAX_TILE_SIZE]`. NaN becomes [`DEFAULT_TILE_SIZE`].
pub fn clamp_tile_size(tile_size: f32) -> f32 {
    if tile_size.is_nan() {
        log::debug!("tile size is NaN, using {DEFAULT_TILE_SIZE}");
        return DEFAULT_TILE_SIZE;
    }
    let clamped = tile_size.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE);
    if clamped != tile_size {
        log::debug!("tile size {tile_size} clamped to {clamped}");
    }
    clamped
}

/// Everything that controls how a water volume is meshed, apart from its shape and origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeConfig {
    tile_size: f32,
    /// Side faces that may be emitted. The top face is never gated.
    pub include_faces: FaceFlags,
    /// Directions whose exposed edges carry the foam marker.
    pub include_foam: FaceFlags,
    /// Rebuild on every [`update`](crate::WaterVolume::update) while the host is not simulating.
    pub realtime_updates: bool,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            include_faces: FaceFlags::ALL,
            include_foam: FaceFlags::ALL,
            realtime_updates: false,
        }
    }
}

impl VolumeConfig {
    pub fn new(tile_size: f32, include_faces: FaceFlags, include_foam: FaceFlags) -> Self {
        Self {
            tile_size: clamp_tile_size(tile_size),
            include_faces,
            include_foam,
            realtime_updates: false,
        }
    }

    /// World units per voxel edge, always within `[MIN_TILE_SIZE, MAX_TILE_SIZE]`.
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn set_tile_size(&mut self, tile_size: f32) {
        self.tile_size = clamp_tile_size(tile_size);
    }

    pub fn with_tile_size(mut self, tile_size: f32) -> Self {
        self.set_tile_size(tile_size);
        self
    }

    pub fn with_realtime_updates(mut self, realtime_updates: bool) -> Self {
        self.realtime_updates = realtime_updates;
        self
    }

    /// Re-applies the tile size clamp and drops unknown side bits, e.g. after deserializing.
    pub fn validated(mut self) -> Self {
        self.tile_size = clamp_tile_size(self.tile_size);
        self.include_faces = FaceFlags::from_bits_truncate(self.include_faces.bits());
        self.include_foam = FaceFlags::from_bits_truncate(self.include_foam.bits());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_size_is_clamped_into_range() {
        assert_eq!(clamp_tile_size(0.0), MIN_TILE_SIZE);
        assert_eq!(clamp_tile_size(-3.0), MIN_TILE_SIZE);
        assert_eq!(clamp_tile_size(250.0), MAX_TILE_SIZE);
        assert_eq!(clamp_tile_size(f32::INFINITY), MAX_TILE_SIZE);
        assert_eq!(clamp_tile_size(f32::NAN), DEFAULT_TILE_SIZE);
        assert_eq!(clamp_tile_size(2.5), 2.5);

        let config = VolumeConfig::default().with_tile_size(1000.0);
        assert_eq!(config.tile_size(), MAX_TILE_SIZE);
    }

    #[test]
    fn face_flags_set_operations() {
        let mut flags = FaceFlags::NEG_X | FaceFlags::POS_Z;
        assert!(flags.contains(FaceFlags::NEG_X));
        assert!(!flags.contains(FaceFlags::POS_X));
        assert!(!flags.contains(FaceFlags::NEG_X | FaceFlags::POS_X));
        assert!(flags.intersects(FaceFlags::NEG_X | FaceFlags::POS_X));

        flags.insert(FaceFlags::POS_X);
        flags.remove(FaceFlags::NEG_X);
        assert_eq!(flags, FaceFlags::POS_X | FaceFlags::POS_Z);
        assert_eq!((flags & FaceFlags::POS_Z).bits(), 8);

        assert_eq!(FaceFlags::from_bits_truncate(0xff), FaceFlags::ALL);
        assert!(FaceFlags::NONE.is_empty());
    }

    #[test]
    fn default_config_includes_every_side() {
        let config = VolumeConfig::default();
        assert_eq!(config.tile_size(), 1.0);
        assert_eq!(config.include_faces, FaceFlags::ALL);
        assert_eq!(config.include_foam, FaceFlags::ALL);
        assert!(!config.realtime_updates);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_config_can_be_revalidated() {
        let json = r#"{"tile_size":0.0,"include_faces":3,"include_foam":0,"realtime_updates":true}"#;
        let config: VolumeConfig = serde_json::from_str(json).unwrap();
        let config = config.validated();
        assert_eq!(config.tile_size(), MIN_TILE_SIZE);
        assert_eq!(config.include_faces, FaceFlags::NEG_X | FaceFlags::POS_X);
        assert!(config.include_foam.is_empty());
        assert!(config.realtime_updates);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_side_bits_are_dropped_on_deserialize() {
        let json = r#"{"tile_size":1.0,"include_faces":255,"include_foam":20,"realtime_updates":false}"#;
        let config: VolumeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.include_faces, FaceFlags::ALL);
        assert_eq!(config.include_foam, FaceFlags::NEG_Z);

        let flags: FaceFlags = serde_json::from_str("0").unwrap();
        assert!(flags.is_empty());
        assert_eq!(serde_json::to_string(&(FaceFlags::NEG_X | FaceFlags::POS_Z)).unwrap(), "9");
    }

    #[test]
    fn face_flags_from_bits() {
        assert_eq!(FaceFlags::from(0b1_0011), FaceFlags::NEG_X | FaceFlags::POS_X);
        assert_eq!(u8::from(FaceFlags::ALL), 0b1111);
    }
}
