//! Animated surface height, matching the displacement the water shader applies to the top faces.

use crate::WaterVolume;

/// Parameters of the surface wave. Hosts should keep these in sync with the material driving the water shader.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveParams {
    pub frequency: f32,
    pub scale: f32,
    pub speed: f32,
}

impl WaveParams {
    pub fn new(frequency: f32, scale: f32, speed: f32) -> Self {
        Self {
            frequency,
            scale,
            speed,
        }
    }

    /// Vertical displacement at `position` after `time` seconds:
    /// `(sin(x * frequency + time * speed) + cos(z * frequency + time * speed)) * scale`.
    #[inline]
    pub fn offset(&self, position: [f32; 3], time: f32) -> f32 {
        let t = time * self.speed;
        ((position[0] * self.frequency + t).sin() + (position[2] * self.frequency + t).cos()) * self.scale
    }
}

/// Height of the animated surface above `position`, or `None` where [`WaterVolume::query_height`] finds no water.
pub fn surface_height(
    volume: &WaterVolume,
    waves: Option<&WaveParams>,
    position: [f32; 3],
    time: f32,
) -> Option<f32> {
    let height = volume.query_height(position)?;
    Some(match waves {
        Some(waves) => height + waves.offset(position, time),
        None => height,
    })
}

/// `position` moved vertically onto the surface. Positions with no water below them are returned unchanged.
pub fn float_position(
    volume: &WaterVolume,
    waves: Option<&WaveParams>,
    position: [f32; 3],
    time: f32,
) -> [f32; 3] {
    let [x, y, z] = position;
    [x, surface_height(volume, waves, position, time).unwrap_or(y), z]
}
