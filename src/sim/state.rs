//! Game state and core simulation types
//!
//! One `GameState` owns a whole session; only the tick, start and ramp
//! functions in `sim::tick` mutate it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnClock;
use super::vitals::{Difficulty, Vitals};
use crate::consts::*;

/// Whether the session is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start signal (before the first run or after game over)
    #[default]
    Idle,
    /// Active gameplay
    Running,
}

/// Things that happened during a tick, drained by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Caught,
    Missed,
    Nibbled,
    Swatted,
    GameOver,
}

/// Playfield dimensions in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Where bugs are heading: the middle of the leaf cluster
    pub fn leaf_target(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - LEAF_FLOOR_OFFSET)
    }
}

/// The player's pot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pot {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
}

impl Pot {
    /// A pot centred near the bottom of the playfield
    pub fn centered(field: &Playfield) -> Self {
        Self {
            x: field.width / 2.0 - POT_WIDTH / 2.0,
            y: field.height - POT_FLOOR_OFFSET,
            w: POT_WIDTH,
            h: POT_HEIGHT,
            speed: POT_SPEED,
        }
    }

    /// Shift horizontally, staying inside the playfield
    pub fn shift(&mut self, dx: f32, field: &Playfield) {
        self.x = (self.x + dx).clamp(0.0, (field.width - self.w).max(0.0));
    }

    /// Point where caught drops splash
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y)
    }
}

/// A falling raindrop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Raindrop {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// A bug crawling toward the leaves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bug {
    pub pos: Vec2,
    pub vel_x: f32,
    /// Carried for parity with spawned bugs; removal is by position only
    pub life: u32,
}

/// What produced a splash (drives its colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashKind {
    Catch,
    Miss,
    Nibble,
    Swat,
}

/// A short-lived feedback particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Splash {
    pub pos: Vec2,
    pub radius: f32,
    /// Ticks left
    pub life: u32,
    pub kind: SplashKind,
}

impl Splash {
    pub fn catch(pos: Vec2, drop_radius: f32) -> Self {
        Self {
            pos,
            radius: drop_radius * 1.6,
            life: 18,
            kind: SplashKind::Catch,
        }
    }

    pub fn miss(pos: Vec2, drop_radius: f32) -> Self {
        Self {
            pos,
            radius: drop_radius * 1.6,
            life: 16,
            kind: SplashKind::Miss,
        }
    }

    pub fn nibble(pos: Vec2) -> Self {
        Self {
            pos,
            radius: 10.0,
            life: 22,
            kind: SplashKind::Nibble,
        }
    }

    pub fn swat(pos: Vec2) -> Self {
        Self {
            pos,
            radius: 6.0,
            life: 18,
            kind: SplashKind::Swat,
        }
    }

    /// Advance one tick; returns false once the splash has expired
    pub fn age(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.radius *= SPLASH_SHRINK;
        self.life > 0
    }

    /// Opacity for drawing, 1.0 for the longest-lived splashes
    pub fn alpha(&self) -> f32 {
        (self.life as f32 / SPLASH_FULL_ALPHA_LIFE).clamp(0.0, 1.0)
    }
}

/// How the last session ended
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u64,
    pub elapsed_secs: f64,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub field: Playfield,
    pub pot: Pot,
    pub vitals: Vitals,
    pub difficulty: Difficulty,
    /// Active drops
    pub drops: Vec<Raindrop>,
    /// Active bugs
    pub bugs: Vec<Bug>,
    /// Visual splashes (not gameplay-affecting)
    pub splashes: Vec<Splash>,
    pub spawn_clock: SpawnClock,
    /// Wall-clock ms when the current session started
    pub started_at_ms: f64,
    /// Simulation tick counter for the current session
    pub time_ticks: u64,
    /// Set when a session ends, cleared on the next start
    pub last_session: Option<SessionSummary>,
    /// Events since the presentation layer last drained them
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Playfield::default())
    }
}

impl GameState {
    /// An idle session on the given playfield
    pub fn new(field: Playfield) -> Self {
        Self {
            phase: GamePhase::Idle,
            field,
            pot: Pot::centered(&field),
            vitals: Vitals::default(),
            difficulty: Difficulty::default(),
            drops: Vec::new(),
            bugs: Vec::new(),
            splashes: Vec::new(),
            spawn_clock: SpawnClock::default(),
            started_at_ms: 0.0,
            time_ticks: 0,
            last_session: None,
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Seconds since the session started
    pub fn elapsed_secs(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_at_ms) / 1000.0).max(0.0)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Put every field back to its session-start value
    pub(crate) fn reset(&mut self, now_ms: f64) {
        self.drops.clear();
        self.bugs.clear();
        self.splashes.clear();
        self.difficulty.reset();
        self.vitals = Vitals::default();
        self.pot = Pot::centered(&self.field);
        self.spawn_clock = SpawnClock::starting_at(now_ms);
        self.started_at_ms = now_ms;
        self.time_ticks = 0;
        self.last_session = None;
    }
}
