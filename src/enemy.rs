/// A single enemy's motion state machine.

use tracing::debug;

use crate::entities::{EnemyState, Position};
use crate::path::{dive_path, Path};

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyAgent {
    pub pos: Position,
    pub entrance: Path,
    /// Fixed for the agent's lifetime.
    pub slot: Position,
    /// Empty until the first dive.
    pub dive: Path,
    pub state: EnemyState,
    /// Units per tick (base speed × wave multiplier).
    pub speed: f32,
    pub alive: bool,
}

impl EnemyAgent {
    /// A fresh agent at the head of its entrance path.
    pub fn new(entrance: Path, slot: Position, speed: f32) -> Self {
        let pos = entrance.current().unwrap_or(slot);
        Self {
            pos,
            entrance,
            slot,
            dive: Path::default(),
            state: EnemyState::Entering,
            speed,
            alive: true,
        }
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        match self.state {
            EnemyState::Entering => {
                follow(&mut self.pos, &mut self.entrance, self.speed);
                if self.entrance.is_exhausted() {
                    self.settle();
                }
            }
            EnemyState::Formation => {
                self.pos = self.slot;
            }
            EnemyState::Diving => {
                follow(&mut self.pos, &mut self.dive, self.speed);
                if self.dive.is_exhausted() {
                    self.settle();
                }
            }
        }
    }

    /// Begin a dive toward `player`. Only agents sitting in formation dive;
    /// the call is ignored in any other state.
    pub fn start_dive(&mut self, player: Position, curve: f32) -> bool {
        match self.state {
            EnemyState::Formation => {
                self.dive = dive_path(self.pos, player, self.slot, curve);
                self.state = EnemyState::Diving;
                debug!(x = self.slot.x, y = self.slot.y, "enemy dive started");
                true
            }
            EnemyState::Entering | EnemyState::Diving => false,
        }
    }

    fn settle(&mut self) {
        self.state = EnemyState::Formation;
        self.pos = self.slot;
    }
}

/// Step `pos` toward the path's current waypoint by at most `speed`.
///
/// Within reach (including distance zero) the position snaps onto the
/// waypoint and the cursor advances; one waypoint per tick at most.
fn follow(pos: &mut Position, path: &mut Path, speed: f32) {
    let Some(target) = path.current() else {
        return;
    };
    let delta = target - *pos;
    let distance = delta.length();
    if distance < speed || distance <= f32::EPSILON {
        *pos = target;
        path.advance();
    } else {
        *pos = *pos + delta * (speed / distance);
    }
}
