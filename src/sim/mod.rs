//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time comes in as explicit `now_ms`/`dt` arguments
//! - Randomness comes in through `RandomSource`
//! - Entity lists are scanned back to front so removal is safe

pub mod collision;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod vitals;

pub use collision::{bug_offscreen, bug_reaches_leaves, drop_in_pot, drop_missed, swat_target};
pub use rng::{FixedSequence, RandomSource, SeededRandom};
pub use spawn::{SpawnClock, spawn_bug, spawn_drop};
pub use state::{
    Bug, GameEvent, GamePhase, GameState, Playfield, Pot, Raindrop, SessionSummary, Splash,
    SplashKind,
};
pub use tick::{Nudge, TickInput, ramp_difficulty, start, tick};
pub use vitals::{Difficulty, Vitals};
