/// Game entities and the master state. Plain data plus geometric helpers.

use std::ops::{Add, Mul, Sub};

use crate::enemy::EnemyAgent;
use crate::tuning::Tuning;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A point on the logical playfield (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Position) -> f32 {
        (other - self).length()
    }

    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Position {
    type Output = Position;

    fn mul(self, rhs: f32) -> Position {
        Position::new(self.x * rhs, self.y * rhs)
    }
}

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    /// Following the spiral entrance path.
    Entering,
    /// Pinned to the formation slot.
    Formation,
    /// Following a dive path toward the player and back.
    Diving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Horizontal input reduced to a single direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    Idle,
}

/// Something the front-end may want to react to (sound, log line, flash).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    EnemyDestroyed { points: u32 },
    PlayerDestroyed,
    ExtraLife,
    LevelUp { level: u32 },
    GameOver,
}

// ── Player & projectile ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub pos: Position,
    /// Vertical velocity per tick (negative = upward).
    pub vel_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerShip {
    pub pos: Position,
    /// Horizontal velocity per tick, set by steering.
    pub vel_x: f32,
    pub speed: f32,
    /// At most one shot in flight.
    pub projectile: Option<Projectile>,
}

impl PlayerShip {
    pub fn new(pos: Position, speed: f32) -> Self {
        Self {
            pos,
            vel_x: 0.0,
            speed,
            projectile: None,
        }
    }
}

// ── Timers ────────────────────────────────────────────────────────────────────

/// The pre-game sequence where the ship glides into its start position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intro {
    pub timer: u32,
    pub done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownKind {
    /// After a player death: a fresh ship and the next wave.
    Respawn,
    /// After a cleared wave, or at game start: only the next wave.
    NextWave,
}

/// Frame-counted pause during which enemies and the player are frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub frames_left: u32,
    pub kind: CountdownKind,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: PlayerShip,
    /// Enemy arena for the current wave; dead agents keep their slot with
    /// `alive == false` until the wave is replaced.
    pub enemies: Vec<EnemyAgent>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub speed_multiplier: f32,
    /// Score at which the next extra life is granted.
    pub extra_life_at: u32,
    pub intro: Intro,
    pub countdown: Option<Countdown>,
    pub status: GameStatus,
    pub frame: u64,
    /// Events raised since the front-end last drained them.
    pub events: Vec<GameEvent>,
    pub tuning: Tuning,
}

impl GameState {
    pub fn live_enemies(&self) -> impl Iterator<Item = &EnemyAgent> {
        self.enemies.iter().filter(|e| e.alive)
    }

    pub fn live_enemy_count(&self) -> usize {
        self.live_enemies().count()
    }

    /// The player steers and shoots once the intro has finished, and never
    /// while play is paused by a countdown.
    pub fn player_controllable(&self) -> bool {
        self.intro.done && self.status == GameStatus::Playing && self.countdown.is_none()
    }
}
