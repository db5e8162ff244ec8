//! Gameplay tuning.
//!
//! Keep this separate from runtime configuration (frame rate, log file, etc.).
//! Every field has a default, so a tuning file only needs the values it
//! overrides.

mod enemy;
mod path;
mod player;
mod scoring;
mod timers;
mod wave;

pub use enemy::{DiveTuning, EnemyTuning};
pub use path::PathTuning;
pub use player::PlayerTuning;
pub use scoring::ScoringTuning;
pub use timers::TimerTuning;
pub use wave::WaveTuning;

use serde::Deserialize;

use crate::error::GameError;

/// Logical playfield size. y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 1300.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield: Playfield,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub dive: DiveTuning,
    pub path: PathTuning,
    pub wave: WaveTuning,
    pub scoring: ScoringTuning,
    pub timers: TimerTuning,
}

impl Tuning {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        fn invalid(msg: &str) -> Result<(), GameError> {
            Err(GameError::InvalidTuning(msg.to_string()))
        }

        // Written so that NaN fails every check.
        let positive = |x: f32| x.is_finite() && x > 0.0;
        let non_negative = |x: f32| x.is_finite() && x >= 0.0;

        let p = &self.player;
        let w = &self.wave;
        let path = &self.path;

        if !positive(self.playfield.width) || !positive(self.playfield.height) {
            return invalid("playfield dimensions must be positive");
        }
        if !positive(p.speed) || !positive(p.projectile_speed) {
            return invalid("player speeds must be positive");
        }
        if !positive(p.width) || !positive(p.height) || !positive(p.projectile_size) {
            return invalid("player sizes must be positive");
        }
        if ![p.start_x, p.start_y, p.intro_x, p.intro_y]
            .iter()
            .all(|v| v.is_finite())
        {
            return invalid("player positions must be finite");
        }
        if p.lives == 0 {
            return invalid("player.lives must be at least 1");
        }
        if !positive(self.enemy.base_speed) {
            return invalid("enemy.base_speed must be positive");
        }
        if !positive(self.enemy.width) || !positive(self.enemy.height) {
            return invalid("enemy sizes must be positive");
        }
        if !non_negative(self.dive.curve) {
            return invalid("dive.curve must be finite and not negative");
        }
        if !positive(self.timers.intro_speed) {
            return invalid("timers.intro_speed must be positive");
        }
        if !positive(path.loops) || !non_negative(path.spiral_radius) {
            return invalid("path.loops must be positive and path.spiral_radius not negative");
        }
        if !path.vertical_drop.is_finite() || !path.center_offset.is_finite() {
            return invalid("path offsets must be finite");
        }
        if !positive(w.spacing_x) || !positive(w.spacing_y) {
            return invalid("wave spacing must be positive");
        }
        if !w.formation_top.is_finite() || !w.spawn_y.is_finite() {
            return invalid("wave.formation_top and wave.spawn_y must be finite");
        }
        if !non_negative(w.speed_step) {
            return invalid("wave.speed_step must be finite and not negative");
        }
        if self.wave.rows == 0 || self.wave.max_cols == 0 {
            return invalid("wave.rows and wave.max_cols must be at least 1");
        }
        if self.wave.initial_size == 0 {
            return invalid("wave.initial_size must be at least 1");
        }
        if self.wave.max_size < self.wave.initial_size {
            return invalid("wave.max_size must not be below wave.initial_size");
        }
        if self.path.points_per_loop == 0 || self.path.approach_steps == 0 {
            return invalid("path point counts must be at least 1");
        }
        let chance_ok = |p: f64| (0.0..=1.0).contains(&p);
        if !chance_ok(self.dive.base_chance) || !chance_ok(self.dive.per_level) {
            return invalid("dive probabilities must lie in [0, 1]");
        }
        if self.scoring.extra_life_step == 0 {
            return invalid("scoring.extra_life_step must be at least 1");
        }
        Ok(())
    }
}
