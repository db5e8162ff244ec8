/// Waypoint paths and the two generators that build them.
///
/// Both generators are pure: identical inputs always give identical paths.

use std::f32::consts::TAU;

use crate::entities::Position;
use crate::tuning::PathTuning;

/// A finite, non-restartable sequence of waypoints with a cursor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<Position>,
    index: usize,
}

impl Path {
    pub fn new(points: Vec<Position>) -> Self {
        Self { points, index: 0 }
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The waypoint currently being approached, if any remain.
    pub fn current(&self) -> Option<Position> {
        self.points.get(self.index).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.points.len()
    }

    /// Move the cursor past the current waypoint. Saturates at the end.
    pub fn advance(&mut self) {
        if self.index < self.points.len() {
            self.index += 1;
        }
    }
}

/// Spiral entrance from `start` into the formation slot `target`.
///
/// The spiral shrinks from `spiral_radius` to zero around a centre
/// `center_offset` below `start` while sinking `vertical_drop`; `flip`
/// mirrors its handedness. A straight approach follows, ending exactly on
/// `target`.
pub fn entrance_path(start: Position, flip: bool, target: Position, tuning: &PathTuning) -> Path {
    let total = tuning.spiral_points();
    let per_loop = tuning.points_per_loop.max(1) as f32;
    let center = Position::new(start.x, start.y + tuning.center_offset);

    let mut points = Vec::with_capacity(total + tuning.approach_steps as usize);
    for i in 0..total {
        let progress = i as f32 / total as f32;
        let mut angle = i as f32 / per_loop * TAU;
        if flip {
            angle = -angle;
        }
        let radius = tuning.spiral_radius * (1.0 - progress);
        points.push(Position::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin() + tuning.vertical_drop * progress,
        ));
    }

    let from = points.last().copied().unwrap_or(start);
    let steps = tuning.approach_steps.max(1);
    let step = (target - from) * (1.0 / steps as f32);
    for i in 1..steps {
        points.push(from + step * i as f32);
    }
    // Land on the slot exactly rather than on an accumulated approximation.
    points.push(target);

    Path::new(points)
}

/// Dive toward a snapshot of the player's position and back to the slot.
///
/// Four points: the start/player midpoint pushed down by `curve`, the player,
/// the same midpoint again, then the formation slot.
pub fn dive_path(start: Position, player: Position, slot: Position, curve: f32) -> Path {
    let mid = start.midpoint(player) + Position::new(0.0, curve);
    Path::new(vec![mid, player, mid, slot])
}
