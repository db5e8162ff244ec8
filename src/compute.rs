/// Game loop controller.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`. Side effects are limited to the injected RNG and the event
/// queue carried on the returned state.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::collision::{overlapping_pairs, Bounds};
use crate::entities::{
    Countdown, CountdownKind, EnemyState, GameEvent, GameState, GameStatus, Intro, PlayerShip,
    Position, Projectile, Steer,
};
use crate::spawner::spawn_wave;
use crate::tuning::{ScoringTuning, Tuning};

/// Points awarded for destroying an enemy in `state`.
pub fn points_for(state: EnemyState, scoring: &ScoringTuning) -> u32 {
    match state {
        EnemyState::Entering => scoring.entering,
        EnemyState::Formation => scoring.formation,
        EnemyState::Diving => scoring.diving,
    }
}

/// One Bernoulli draw deciding whether a dive starts this tick.
pub fn roll_dive(rng: &mut impl Rng, chance: f64) -> bool {
    rng.gen_bool(chance.clamp(0.0, 1.0))
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state a new game starts from.
///
/// The ship waits at its intro position and the first wave is queued behind
/// a countdown so it arrives as the ship settles.
pub fn init_state(tuning: Tuning) -> GameState {
    let p = &tuning.player;
    GameState {
        player: PlayerShip::new(Position::new(p.intro_x, p.intro_y), p.speed),
        enemies: Vec::new(),
        score: 0,
        lives: p.lives,
        level: 1,
        speed_multiplier: tuning.wave.speed_multiplier(1),
        extra_life_at: tuning.scoring.extra_life_first,
        intro: Intro {
            timer: 0,
            done: false,
        },
        countdown: Some(Countdown {
            frames_left: tuning.timers.respawn_frames,
            kind: CountdownKind::NextWave,
        }),
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
        tuning,
    }
}

/// Start over after a game over. Ignored while a game is still running.
pub fn restart(state: &GameState) -> GameState {
    match state.status {
        GameStatus::GameOver => {
            info!(final_score = state.score, "restarting");
            init_state(state.tuning)
        }
        GameStatus::Playing => state.clone(),
    }
}

// ── Input-driven state transitions ──────────────────────────────────────────

pub fn steer(state: &GameState, direction: Steer) -> GameState {
    if !state.player_controllable() {
        return state.clone();
    }
    let speed = state.player.speed;
    let vel_x = match direction {
        Steer::Left => -speed,
        Steer::Right => speed,
        Steer::Idle => 0.0,
    };
    GameState {
        player: PlayerShip {
            vel_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire a shot — only one may be in flight at a time.
pub fn player_shoot(state: &GameState) -> GameState {
    if !state.player_controllable() || state.player.projectile.is_some() {
        return state.clone();
    }
    let p = &state.tuning.player;
    let shot = Projectile {
        pos: Position::new(state.player.pos.x, state.player.pos.y - p.height / 2.0),
        vel_y: -p.projectile_speed,
    };
    let mut next = state.clone();
    next.player.projectile = Some(shot);
    next.events.push(GameEvent::ShotFired);
    next
}

// ── Per-frame tick (RNG is injected) ────────────────────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Intro glide ──────────────────────────────────────────────────────
    if !next.intro.done {
        advance_intro(&mut next);
    }

    // ── 2. Movement (frozen during countdowns) ──────────────────────────────
    if next.countdown.is_none() {
        for enemy in next.enemies.iter_mut().filter(|e| e.alive) {
            enemy.advance();
        }
        advance_player(&mut next);
    }

    // ── 3. Shot ↔ enemies ───────────────────────────────────────────────────
    resolve_shot(&mut next);

    let active = next.intro.done && next.countdown.is_none();

    // ── 4. Dive trigger ─────────────────────────────────────────────────────
    if active && roll_dive(rng, next.tuning.dive.chance(next.level)) {
        trigger_dive(&mut next, rng);
    }

    // ── 5. Player ↔ enemies ─────────────────────────────────────────────────
    if active && player_hit(&next) {
        player_destroyed(&mut next);
        if next.status == GameStatus::GameOver {
            return next;
        }
    }

    // ── 6. Countdown (only one that was already running) ────────────────────
    if state.countdown.is_some() {
        run_countdown(&mut next);
    }

    // ── 7. Level clear ──────────────────────────────────────────────────────
    if next.intro.done && next.countdown.is_none() && next.live_enemy_count() == 0 {
        level_cleared(&mut next);
    }

    next
}

fn advance_intro(state: &mut GameState) {
    let timers = state.tuning.timers;
    state.intro.timer += 1;
    if state.intro.timer < timers.intro_delay {
        return;
    }

    let p = &state.tuning.player;
    let target = Position::new(p.start_x, p.start_y);
    let delta = target - state.player.pos;
    let distance = delta.length();
    if distance <= timers.intro_speed {
        state.player.pos = target;
        state.intro.done = true;
        info!(frame = state.frame, "intro finished, player in control");
    } else {
        state.player.pos = state.player.pos + delta * (timers.intro_speed / distance);
    }
}

fn advance_player(state: &mut GameState) {
    let tuning = &state.tuning;
    let ship = &mut state.player;

    if state.intro.done {
        let half = tuning.player.width / 2.0;
        ship.pos.x = (ship.pos.x + ship.vel_x).clamp(half, tuning.playfield.width - half);
    }

    if let Some(shot) = ship.projectile.as_mut() {
        shot.pos.y += shot.vel_y;
        // Gone once it leaves the top of the playfield.
        if shot.pos.y < 0.0 {
            ship.projectile = None;
        }
    }
}

fn resolve_shot(state: &mut GameState) {
    let Some(shot) = state.player.projectile.as_ref() else {
        return;
    };
    let size = state.tuning.player.projectile_size;
    let shot_box = [Bounds::new(shot.pos, size, size)];

    let (live, boxes): (Vec<usize>, Vec<Bounds>) = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive)
        .map(|(i, e)| (i, enemy_bounds(e.pos, &state.tuning)))
        .unzip();

    let hits = overlapping_pairs(&shot_box, &boxes);
    if hits.is_empty() {
        return;
    }

    state.player.projectile = None;
    for (_, j) in hits {
        let enemy = &mut state.enemies[live[j]];
        enemy.alive = false;
        let points = points_for(enemy.state, &state.tuning.scoring);
        state.score += points;
        state.events.push(GameEvent::EnemyDestroyed { points });
        debug!(points, state = ?enemy.state, score = state.score, "enemy destroyed");

        if state.score >= state.extra_life_at {
            state.lives += 1;
            state.extra_life_at += state.tuning.scoring.extra_life_step;
            state.events.push(GameEvent::ExtraLife);
            info!(lives = state.lives, next_at = state.extra_life_at, "extra life");
        }
    }
}

fn trigger_dive(state: &mut GameState, rng: &mut impl Rng) {
    let candidates: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive && e.state == EnemyState::Formation)
        .map(|(i, _)| i)
        .collect();

    if let Some(&i) = candidates.choose(rng) {
        let target = state.player.pos;
        let curve = state.tuning.dive.curve;
        state.enemies[i].start_dive(target, curve);
    }
}

fn player_hit(state: &GameState) -> bool {
    let ship = Bounds::new(
        state.player.pos,
        state.tuning.player.width,
        state.tuning.player.height,
    );
    state
        .live_enemies()
        .any(|e| ship.overlaps(&enemy_bounds(e.pos, &state.tuning)))
}

fn player_destroyed(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.level += 1;
    state.speed_multiplier = state.tuning.wave.speed_multiplier(state.level);
    state.enemies.clear();
    state.player.projectile = None;
    state.player.vel_x = 0.0;
    state.events.push(GameEvent::PlayerDestroyed);

    if state.lives == 0 {
        state.status = GameStatus::GameOver;
        state.countdown = None;
        state.events.push(GameEvent::GameOver);
        info!(score = state.score, level = state.level, "game over");
    } else {
        state.countdown = Some(Countdown {
            frames_left: state.tuning.timers.respawn_frames,
            kind: CountdownKind::Respawn,
        });
        info!(lives = state.lives, level = state.level, "player destroyed");
    }
}

fn run_countdown(state: &mut GameState) {
    let Some(countdown) = state.countdown.as_mut() else {
        return;
    };
    countdown.frames_left = countdown.frames_left.saturating_sub(1);
    if countdown.frames_left > 0 {
        return;
    }

    let kind = countdown.kind;
    state.countdown = None;

    if kind == CountdownKind::Respawn {
        let p = &state.tuning.player;
        state.player = PlayerShip::new(Position::new(p.start_x, p.start_y), p.speed);
    }

    let size = state.tuning.wave.wave_size(state.level);
    state.speed_multiplier = state.tuning.wave.speed_multiplier(state.level);
    state.enemies = spawn_wave(size, state.speed_multiplier, &state.tuning);
}

fn level_cleared(state: &mut GameState) {
    state.level += 1;
    state.speed_multiplier = state.tuning.wave.speed_multiplier(state.level);
    state.countdown = Some(Countdown {
        frames_left: state.tuning.timers.level_clear_frames,
        kind: CountdownKind::NextWave,
    });
    state.events.push(GameEvent::LevelUp { level: state.level });
    info!(level = state.level, score = state.score, "wave cleared");
}

fn enemy_bounds(pos: Position, tuning: &Tuning) -> Bounds {
    Bounds::new(pos, tuning.enemy.width, tuning.enemy.height)
}
