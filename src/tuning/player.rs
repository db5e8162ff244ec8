/// Gameplay tuning for the player ship and its shot.
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal speed in units per tick while a direction is held.
    pub speed: f32,

    /// Hitbox size in playfield units.
    pub width: f32,
    pub height: f32,

    /// Where a freshly spawned ship is placed (centre).
    pub start_x: f32,
    pub start_y: f32,

    /// Where the intro ship waits before gliding down to the start position.
    pub intro_x: f32,
    pub intro_y: f32,

    pub lives: u32,

    /// Upward speed of the shot in units per tick.
    pub projectile_speed: f32,

    /// Side length of the (square) shot hitbox.
    pub projectile_size: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            width: 70.0,
            height: 70.0,
            start_x: 550.0,
            start_y: 1200.0,
            intro_x: 860.0,
            intro_y: 650.0,
            lives: 3,
            projectile_speed: 8.0,
            projectile_size: 4.0,
        }
    }
}
