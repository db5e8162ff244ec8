/// Frame-counted delays. All values are in ticks (60 per second).
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimerTuning {
    /// Pause after the player is destroyed (and at game start).
    pub respawn_frames: u32,

    /// Pause between a cleared wave and the next one.
    pub level_clear_frames: u32,

    /// Frames the intro ship waits before gliding into place.
    pub intro_delay: u32,

    /// Units per tick of the intro glide.
    pub intro_speed: f32,
}

impl Default for TimerTuning {
    fn default() -> Self {
        Self {
            respawn_frames: 180,
            level_clear_frames: 120,
            intro_delay: 180,
            intro_speed: 4.0,
        }
    }
}
