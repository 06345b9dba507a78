//! Rain Drop Rush - keep a potted plant alive in the rain
//!
//! Core modules:
//! - `sim`: Simulation (spawning, physics, collisions, vitals, game state)
//! - `renderer`: HUD/plant view math and the Canvas 2D painter
//! - `audio`: Procedural cue beeps
//! - `platform`: Browser input collection
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default playfield size (the canvas overrides it at start-up)
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Milliseconds per nominal frame; frame deltas are expressed in these units
    pub const FRAME_MS: f64 = 16.666;
    /// Largest frame delta the host feeds the sim (a hidden tab resumes gently)
    pub const MAX_FRAME_DT: f32 = 6.0;

    /// Pot geometry
    pub const POT_WIDTH: f32 = 100.0;
    pub const POT_HEIGHT: f32 = 24.0;
    /// Pot top sits this far above the playfield floor
    pub const POT_FLOOR_OFFSET: f32 = 120.0;
    /// Pixels per tick while a move key is held (taps move twice this)
    pub const POT_SPEED: f32 = 6.0;

    /// Leaf cluster target sits this far above the floor, horizontally centred
    pub const LEAF_FLOOR_OFFSET: f32 = 220.0;
    /// Distance at which a bug reaches the leaves
    pub const NIBBLE_RADIUS: f32 = 60.0;
    /// Click distance that counts as swatting a bug
    pub const SWAT_RADIUS: f32 = 28.0;

    /// Spawn gates (ms)
    pub const DROP_SPAWN_INTERVAL_MS: f64 = 700.0;
    pub const BUG_SPAWN_INTERVAL_MS: f64 = 5000.0;
    /// Difficulty ramp timer period (ms)
    pub const DIFFICULTY_RAMP_INTERVAL_MS: u32 = 2000;

    /// Drop physics
    pub const GRAVITY: f32 = 0.35;
    pub const GRAVITY_FRAME_SCALE: f32 = 0.1;
    pub const DROP_SPAWN_Y: f32 = -10.0;
    pub const DROP_EDGE_MARGIN: f32 = 9.0;
    /// Drops this far below the floor count as missed
    pub const DROP_MISS_MARGIN: f32 = 30.0;

    /// Bugs spawn just outside the edges and are culled further out
    pub const BUG_SPAWN_MARGIN: f32 = 20.0;
    pub const BUG_CULL_MARGIN: f32 = 60.0;
    pub const BUG_LIFE: u32 = 8000;
    /// Bug speed gains this fraction of the difficulty
    pub const BUG_DIFFICULTY_FACTOR: f32 = 0.1;

    /// Vitals
    pub const VITAL_MAX: f32 = 100.0;
    pub const CATCH_SCORE: u64 = 5;
    pub const SWAT_SCORE: u64 = 10;
    pub const CATCH_THIRST_GAIN: f32 = 6.0;
    pub const CATCH_DIFFICULTY_GAIN: f32 = 0.006;
    pub const MISS_THIRST_LOSS: f32 = 8.0;
    pub const MISS_HEALTH_LOSS: f32 = 2.0;
    pub const NIBBLE_HEALTH_LOSS: f32 = 12.0;
    pub const NIBBLE_THIRST_LOSS: f32 = 6.0;
    /// Thirst lost per frame at difficulty 1
    pub const THIRST_DECAY: f32 = 0.007;
    /// Added by the periodic ramp timer
    pub const DIFFICULTY_RAMP_STEP: f32 = 0.002;

    /// Splashes
    pub const SPLASH_SHRINK: f32 = 0.98;
    /// Lifetime that maps to full splash opacity
    pub const SPLASH_FULL_ALPHA_LIFE: f32 = 22.0;
}
