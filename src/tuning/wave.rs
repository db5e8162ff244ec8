/// Formation layout and per-level difficulty scaling.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    /// Fixed number of formation rows.
    pub rows: u32,

    /// Upper bound on formation columns.
    pub max_cols: u32,

    pub spacing_x: f32,
    pub spacing_y: f32,

    /// y of the first formation row.
    pub formation_top: f32,

    /// y every entrance path starts from (above the playfield).
    pub spawn_y: f32,

    /// Wave size at level 1.
    pub initial_size: u32,

    /// Extra enemies per level.
    pub size_step: u32,

    pub max_size: u32,

    /// Fractional speed gain per level.
    pub speed_step: f32,
}

impl WaveTuning {
    pub fn capacity(&self) -> u32 {
        self.rows * self.max_cols
    }

    pub fn wave_size(&self, level: u32) -> u32 {
        let grown = self.initial_size + level.saturating_sub(1) * self.size_step;
        grown.min(self.max_size)
    }

    pub fn speed_multiplier(&self, level: u32) -> f32 {
        1.0 + level.saturating_sub(1) as f32 * self.speed_step
    }
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            rows: 6,
            max_cols: 10,
            spacing_x: 95.0,
            spacing_y: 75.0,
            formation_top: 100.0,
            spawn_y: -70.0,
            initial_size: 40,
            size_step: 5,
            max_size: 60,
            speed_step: 0.15,
        }
    }
}
