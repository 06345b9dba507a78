//! Per-frame simulation tick
//!
//! Core game loop: input, spawning, drops, bugs, splashes, vitals, in that
//! order. Every step is a no-op while the session is idle.

use glam::Vec2;

use super::collision::{bug_offscreen, bug_reaches_leaves, drop_in_pot, drop_missed, swat_target};
use super::rng::RandomSource;
use super::spawn::run_spawners;
use super::state::{GameEvent, GamePhase, GameState, SessionSummary, Splash};
use crate::consts::*;

/// One discrete pot move from a tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Left,
    Right,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
    /// Taps since the last tick
    pub nudges: Vec<Nudge>,
    /// Click positions since the last tick (playfield coordinates)
    pub swats: Vec<Vec2>,
}

/// Begin a fresh session. Ignored while one is already running.
pub fn start(state: &mut GameState, now_ms: f64) -> bool {
    if state.is_running() {
        return false;
    }
    state.reset(now_ms);
    state.phase = GamePhase::Running;
    state.push_event(GameEvent::Started);
    log::info!(
        "Session started on {}x{} playfield",
        state.field.width,
        state.field.height
    );
    true
}

/// Periodic difficulty nudge, driven by its own timer
pub fn ramp_difficulty(state: &mut GameState) {
    if state.is_running() {
        state.difficulty.bump(DIFFICULTY_RAMP_STEP);
    }
}

/// Advance the session by one frame.
///
/// `now_ms` is wall-clock time for the spawn gates; `dt` is the frame delta in
/// nominal 60 Hz frames and only scales thirst evaporation.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
    now_ms: f64,
    dt: f32,
) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    apply_input(state, input);
    run_spawners(state, now_ms, rng);
    update_drops(state);
    update_bugs(state);
    state.splashes.retain_mut(Splash::age);
    state.vitals.decay(dt, state.difficulty);

    if state.vitals.is_game_over() {
        let summary = SessionSummary {
            score: state.vitals.score,
            elapsed_secs: state.elapsed_secs(now_ms),
        };
        log::info!(
            "Game over: score {} after {:.1}s (thirst {:.1}, health {:.1})",
            summary.score,
            summary.elapsed_secs,
            state.vitals.thirst,
            state.vitals.health
        );
        state.last_session = Some(summary);
        state.phase = GamePhase::Idle;
        state.push_event(GameEvent::GameOver);
    }
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    let speed = state.pot.speed;
    if input.move_left {
        state.pot.shift(-speed, &state.field);
    }
    if input.move_right {
        state.pot.shift(speed, &state.field);
    }
    for nudge in &input.nudges {
        let dx = match nudge {
            Nudge::Left => -speed * 2.0,
            Nudge::Right => speed * 2.0,
        };
        state.pot.shift(dx, &state.field);
    }

    for &click in &input.swats {
        if let Some(idx) = swat_target(&state.bugs, click) {
            state.bugs.remove(idx);
            state.vitals.apply_swat();
            state.splashes.push(Splash::swat(click));
            state.push_event(GameEvent::Swatted);
        }
    }
}

fn update_drops(state: &mut GameState) {
    // Reverse so removal never skips a drop
    for i in (0..state.drops.len()).rev() {
        let speed = state.difficulty.get();
        let drop = &mut state.drops[i];
        drop.vel.y += GRAVITY * GRAVITY_FRAME_SCALE * speed;
        drop.pos += drop.vel * speed;

        if drop_in_pot(drop, &state.pot) {
            let drop = state.drops.remove(i);
            state.vitals.apply_catch(&mut state.difficulty);
            state
                .splashes
                .push(Splash::catch(Vec2::new(drop.pos.x, state.pot.y), drop.radius));
            state.push_event(GameEvent::Caught);
        } else if drop_missed(drop, &state.field) {
            let drop = state.drops.remove(i);
            state.vitals.apply_miss();
            let floor = state.field.height - 80.0;
            state
                .splashes
                .push(Splash::miss(Vec2::new(drop.pos.x, floor), drop.radius));
            state.push_event(GameEvent::Missed);
        }
    }
}

fn update_bugs(state: &mut GameState) {
    for i in (0..state.bugs.len()).rev() {
        let factor = 1.0 + state.difficulty.get() * BUG_DIFFICULTY_FACTOR;
        let bug = &mut state.bugs[i];
        bug.pos.x += bug.vel_x * factor;

        if bug_reaches_leaves(bug, &state.field) {
            let bug = state.bugs.remove(i);
            state.vitals.apply_nibble();
            state.splashes.push(Splash::nibble(bug.pos));
            state.push_event(GameEvent::Nibbled);
        } else if bug_offscreen(bug, &state.field) {
            state.bugs.remove(i);
        }
    }
}
