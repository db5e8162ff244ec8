use galaga::enemy::EnemyAgent;
use galaga::entities::{EnemyState, Position};
use galaga::path::{entrance_path, Path};
use galaga::tuning::PathTuning;

const SLOT: Position = Position::new(455.0, 175.0);

fn entering_agent(speed: f32) -> EnemyAgent {
    let start = Position::new(SLOT.x, -70.0);
    let path = entrance_path(start, false, SLOT, &PathTuning::default());
    EnemyAgent::new(path, SLOT, speed)
}

fn settled_agent() -> EnemyAgent {
    let mut agent = EnemyAgent::new(Path::new(vec![SLOT]), SLOT, 4.0);
    agent.advance();
    assert_eq!(agent.state, EnemyState::Formation);
    agent
}

/// Tick until the agent leaves `state`, with a generous upper bound.
fn run_out(agent: &mut EnemyAgent, state: EnemyState) -> usize {
    let mut ticks = 0;
    while agent.state == state {
        agent.advance();
        ticks += 1;
        assert!(ticks < 100_000, "agent never left {state:?}");
    }
    ticks
}

// ── Entering ──────────────────────────────────────────────────────────────────

#[test]
fn new_agent_starts_entering_at_path_head() {
    let agent = entering_agent(4.0);
    assert_eq!(agent.state, EnemyState::Entering);
    assert_eq!(agent.pos, agent.entrance.points()[0]);
    assert!(agent.alive);
    assert!(agent.dive.is_empty());
}

#[test]
fn entering_settles_into_slot_at_any_speed() {
    for speed in [1.0, 4.0, 50.0] {
        let mut agent = entering_agent(speed);
        run_out(&mut agent, EnemyState::Entering);
        assert_eq!(agent.state, EnemyState::Formation, "speed {speed}");
        assert_eq!(agent.pos, SLOT, "speed {speed}");
        assert!(agent.entrance.is_exhausted());
    }
}

#[test]
fn faster_agents_arrive_sooner() {
    let mut slow = entering_agent(1.0);
    let mut fast = entering_agent(50.0);
    let slow_ticks = run_out(&mut slow, EnemyState::Entering);
    let fast_ticks = run_out(&mut fast, EnemyState::Entering);
    assert!(fast_ticks < slow_ticks);
    // At most one waypoint per tick, so the path length bounds the fast case.
    assert!(fast_ticks >= fast.entrance.len());
}

#[test]
fn step_never_overshoots_speed() {
    let mut agent = entering_agent(4.0);
    for _ in 0..50 {
        let before = agent.pos;
        agent.advance();
        assert!(agent.pos.distance(before) <= 4.0 + 1e-3);
    }
}

#[test]
fn zero_distance_counts_as_arrived() {
    // Agent already sits on its only waypoint.
    let mut agent = EnemyAgent::new(Path::new(vec![SLOT]), SLOT, 0.0);
    agent.advance();
    assert_eq!(agent.state, EnemyState::Formation);
    assert!(agent.pos.x.is_finite() && agent.pos.y.is_finite());
    assert_eq!(agent.pos, SLOT);
}

// ── Formation ─────────────────────────────────────────────────────────────────

#[test]
fn formation_is_pinned_to_slot() {
    let mut agent = settled_agent();
    agent.pos = Position::new(0.0, 0.0);
    agent.advance();
    assert_eq!(agent.pos, SLOT);
    assert_eq!(agent.state, EnemyState::Formation);
}

// ── Diving ────────────────────────────────────────────────────────────────────

#[test]
fn dive_only_starts_from_formation() {
    let mut agent = entering_agent(4.0);
    assert!(!agent.start_dive(Position::new(550.0, 1200.0), 200.0));
    assert_eq!(agent.state, EnemyState::Entering);

    let mut agent = settled_agent();
    assert!(agent.start_dive(Position::new(550.0, 1200.0), 200.0));
    assert_eq!(agent.state, EnemyState::Diving);
    // Already diving: a second trigger is ignored.
    assert!(!agent.start_dive(Position::new(0.0, 0.0), 200.0));
    assert_eq!(agent.dive.points()[1], Position::new(550.0, 1200.0));
}

#[test]
fn dive_targets_player_snapshot() {
    let mut agent = settled_agent();
    let player = Position::new(700.0, 1200.0);
    agent.start_dive(player, 200.0);
    assert_eq!(agent.dive.len(), 4);
    assert_eq!(agent.dive.points()[1], player);
    assert_eq!(agent.dive.points()[3], SLOT);
}

#[test]
fn dive_returns_to_formation_at_slot() {
    let mut agent = settled_agent();
    agent.start_dive(Position::new(550.0, 1200.0), 200.0);
    let ticks = run_out(&mut agent, EnemyState::Diving);
    assert!(ticks > 4);
    assert_eq!(agent.state, EnemyState::Formation);
    assert_eq!(agent.pos, SLOT);
    assert!(agent.dive.is_exhausted());
}

#[test]
fn dive_passes_through_player_position() {
    let mut agent = settled_agent();
    let player = Position::new(550.0, 1200.0);
    agent.start_dive(player, 200.0);
    let mut visited = false;
    while agent.state == EnemyState::Diving {
        agent.advance();
        visited |= agent.pos == player;
    }
    assert!(visited);
}
