/// Wave spawner: lays out a centred grid formation and creates one entering
/// agent per cell.

use tracing::{info, warn};

use crate::enemy::EnemyAgent;
use crate::entities::Position;
use crate::path::entrance_path;
use crate::tuning::Tuning;

/// Grid dimensions used for a wave of `wave_size` enemies.
///
/// Rows are fixed; columns grow with the wave and are capped.
pub fn grid_dims(wave_size: u32, tuning: &Tuning) -> (u32, u32) {
    let rows = tuning.wave.rows.max(1);
    let cols = wave_size.div_ceil(rows).clamp(1, tuning.wave.max_cols.max(1));
    (cols, rows)
}

/// Formation slots in row-major order, at most `wave_size` of them.
pub fn formation_slots(wave_size: u32, tuning: &Tuning) -> Vec<Position> {
    let wave = &tuning.wave;
    let (cols, rows) = grid_dims(wave_size, tuning);
    let formation_width = (cols - 1) as f32 * wave.spacing_x;
    let left = (tuning.playfield.width - formation_width) / 2.0;

    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .take(wave_size as usize)
        .map(|(row, col)| {
            Position::new(
                left + col as f32 * wave.spacing_x,
                wave.formation_top + row as f32 * wave.spacing_y,
            )
        })
        .collect()
}

/// Build a wave of entering agents.
///
/// Each agent starts above the playfield straight over its slot; agents in
/// the right half of the grid spiral the other way.
pub fn spawn_wave(wave_size: u32, speed_multiplier: f32, tuning: &Tuning) -> Vec<EnemyAgent> {
    let (cols, _) = grid_dims(wave_size, tuning);
    let capacity = tuning.wave.capacity();
    if wave_size > capacity {
        warn!(wave_size, capacity, "wave larger than the formation grid, truncating");
    }

    let speed = tuning.enemy.base_speed * speed_multiplier;
    let enemies: Vec<EnemyAgent> = formation_slots(wave_size, tuning)
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            let col = i as u32 % cols;
            let flip = col * 2 >= cols && cols > 1;
            let start = Position::new(slot.x, tuning.wave.spawn_y);
            let path = entrance_path(start, flip, slot, &tuning.path);
            EnemyAgent::new(path, slot, speed)
        })
        .collect();

    info!(count = enemies.len(), cols, speed, "wave spawned");
    enemies
}
