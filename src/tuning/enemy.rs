/// Gameplay tuning for enemy agents and their dives.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Units per tick at speed multiplier 1.0.
    pub base_speed: f32,

    pub width: f32,
    pub height: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            base_speed: 4.0,
            width: 70.0,
            height: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiveTuning {
    /// Per-tick probability of a dive at level 1.
    pub base_chance: f64,

    /// Added to the per-tick probability for every level above 1.
    pub per_level: f64,

    /// How far below the start/player midpoint the dive swings.
    pub curve: f32,
}

impl DiveTuning {
    /// Probability that a dive is triggered on a single tick at `level`.
    pub fn chance(&self, level: u32) -> f64 {
        let extra = self.per_level * f64::from(level.saturating_sub(1));
        (self.base_chance + extra).clamp(0.0, 1.0)
    }
}

impl Default for DiveTuning {
    fn default() -> Self {
        Self {
            base_chance: 0.01,
            per_level: 0.002,
            curve: 200.0,
        }
    }
}
