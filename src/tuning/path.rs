/// Shape of the spiral entrance path.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathTuning {
    /// Number of spiral turns; may be fractional.
    pub loops: f32,

    pub points_per_loop: u32,

    /// Radius of the first spiral point; shrinks linearly to zero.
    pub spiral_radius: f32,

    /// Total descent over the spiral portion.
    pub vertical_drop: f32,

    /// Spiral centre sits this far below the spawn point.
    pub center_offset: f32,

    /// Straight-line points from the spiral's end to the formation slot.
    pub approach_steps: u32,
}

impl PathTuning {
    pub fn spiral_points(&self) -> usize {
        (self.loops * self.points_per_loop as f32) as usize
    }
}

impl Default for PathTuning {
    fn default() -> Self {
        Self {
            loops: 1.5,
            points_per_loop: 40,
            spiral_radius: 180.0,
            vertical_drop: 350.0,
            center_offset: 100.0,
            approach_steps: 40,
        }
    }
}
