//! Time-gated spawning of drops and bugs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{Bug, GameState, Playfield, Raindrop};
use super::vitals::Difficulty;
use crate::consts::*;

/// Last spawn times (wall-clock ms)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnClock {
    pub last_drop_ms: f64,
    pub last_bug_ms: f64,
}

impl SpawnClock {
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            last_drop_ms: now_ms,
            last_bug_ms: now_ms,
        }
    }

    /// Drop gate; the interval shrinks as difficulty rises but never grows past the base
    pub fn drop_due(&mut self, now_ms: f64, difficulty: Difficulty) -> bool {
        let interval = DROP_SPAWN_INTERVAL_MS / f64::from(difficulty.get().max(1.0));
        if now_ms - self.last_drop_ms > interval {
            self.last_drop_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Bug gate, independent of difficulty
    pub fn bug_due(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_bug_ms > BUG_SPAWN_INTERVAL_MS {
            self.last_bug_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// A new drop just above the visible area
pub fn spawn_drop(field: &Playfield, difficulty: Difficulty, rng: &mut impl RandomSource) -> Raindrop {
    let x = rng.range(DROP_EDGE_MARGIN, field.width - DROP_EDGE_MARGIN);
    // wind
    let vx = rng.range(-0.3, 0.3) * difficulty.get();
    let vy = rng.range(1.0, 1.5);
    let radius = rng.range(8.0, 12.0);
    Raindrop {
        pos: Vec2::new(x, DROP_SPAWN_Y),
        vel: Vec2::new(vx, vy),
        radius,
    }
}

/// A new bug just outside one of the side edges, heading inward
pub fn spawn_bug(field: &Playfield, rng: &mut impl RandomSource) -> Bug {
    let from_left = rng.next_unit() < 0.5;
    let top = field.height - LEAF_FLOOR_OFFSET;
    let y = rng.range(top, top + 80.0);
    let speed = rng.range(1.5, 2.5);
    let (x, vel_x) = if from_left {
        (-BUG_SPAWN_MARGIN, speed)
    } else {
        (field.width + BUG_SPAWN_MARGIN, -speed)
    };
    Bug {
        pos: Vec2::new(x, y),
        vel_x,
        life: BUG_LIFE,
    }
}

/// Run both spawn gates for this tick
pub fn run_spawners(state: &mut GameState, now_ms: f64, rng: &mut impl RandomSource) {
    if state.spawn_clock.drop_due(now_ms, state.difficulty) {
        let drop = spawn_drop(&state.field, state.difficulty, rng);
        log::debug!("Drop spawned at x={:.1}", drop.pos.x);
        state.drops.push(drop);
    }
    if state.spawn_clock.bug_due(now_ms) {
        let bug = spawn_bug(&state.field, rng);
        log::debug!("Bug spawned at ({:.1}, {:.1})", bug.pos.x, bug.pos.y);
        state.bugs.push(bug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{FixedSequence, SeededRandom};

    #[test]
    fn test_drop_parameters_from_draws() {
        let field = Playfield::new(480.0, 720.0);
        let mut rng = FixedSequence::new(vec![0.5, 0.75, 0.5, 0.25]);
        let mut difficulty = Difficulty::default();
        difficulty.bump(1.0);

        let drop = spawn_drop(&field, difficulty, &mut rng);
        assert_eq!(drop.pos, Vec2::new(240.0, -10.0));
        assert!((drop.vel.x - 0.3).abs() < 1e-5);
        assert_eq!(drop.vel.y, 1.25);
        assert_eq!(drop.radius, 9.0);
    }

    #[test]
    fn test_drop_ranges_hold() {
        let field = Playfield::default();
        let mut rng = SeededRandom::new(7);
        for _ in 0..500 {
            let drop = spawn_drop(&field, Difficulty::default(), &mut rng);
            assert!(drop.pos.x >= 9.0 && drop.pos.x < field.width - 9.0);
            assert!(drop.vel.x >= -0.3 && drop.vel.x < 0.3);
            assert!(drop.vel.y >= 1.0 && drop.vel.y < 1.5);
            assert!(drop.radius >= 8.0 && drop.radius < 12.0);
        }
    }

    #[test]
    fn test_bug_sides() {
        let field = Playfield::new(480.0, 720.0);

        let mut left = FixedSequence::new(vec![0.1, 0.0, 0.0]);
        let bug = spawn_bug(&field, &mut left);
        assert_eq!(bug.pos, Vec2::new(-20.0, 500.0));
        assert_eq!(bug.vel_x, 1.5);

        let mut right = FixedSequence::new(vec![0.9, 0.5, 0.5]);
        let bug = spawn_bug(&field, &mut right);
        assert_eq!(bug.pos, Vec2::new(500.0, 540.0));
        assert_eq!(bug.vel_x, -2.0);
        assert_eq!(bug.life, BUG_LIFE);
    }

    #[test]
    fn test_drop_gate_shrinks_with_difficulty() {
        let mut clock = SpawnClock::starting_at(0.0);
        let base = Difficulty::default();
        assert!(!clock.drop_due(700.0, base));
        assert!(clock.drop_due(701.0, base));
        assert_eq!(clock.last_drop_ms, 701.0);

        let mut doubled = Difficulty::default();
        doubled.bump(1.0);
        assert!(!clock.drop_due(1051.0, doubled));
        assert!(clock.drop_due(1052.0, doubled));
    }

    #[test]
    fn test_bug_gate_ignores_difficulty() {
        let mut clock = SpawnClock::starting_at(1000.0);
        assert!(!clock.bug_due(6000.0));
        assert!(clock.bug_due(6000.5));
        assert!(!clock.bug_due(7000.0));
    }
}
