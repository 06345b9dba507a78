//! Plant vitals and the difficulty scalar
//!
//! Thirst and health are floored at zero on every change, so the game-over
//! check and the HUD always see the same non-negative values.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Speed multiplier applied to spawning and movement.
///
/// Only ever grows during a session; `reset` is the single way back to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty(f32);

impl Default for Difficulty {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Difficulty {
    pub fn get(self) -> f32 {
        self.0
    }

    /// Raise the multiplier (negative amounts are ignored)
    pub fn bump(&mut self, amount: f32) {
        self.0 += amount.max(0.0);
    }

    pub fn reset(&mut self) {
        self.0 = 1.0;
    }
}

/// Score plus the two plant resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub score: u64,
    /// 0-100, restored by catches
    pub thirst: f32,
    /// 0-100, only ever drained
    pub health: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            score: 0,
            thirst: VITAL_MAX,
            health: VITAL_MAX,
        }
    }
}

impl Vitals {
    /// A drop landed in the pot
    pub fn apply_catch(&mut self, difficulty: &mut Difficulty) {
        self.score += CATCH_SCORE;
        self.thirst = (self.thirst + CATCH_THIRST_GAIN).min(VITAL_MAX);
        difficulty.bump(CATCH_DIFFICULTY_GAIN);
    }

    /// A drop hit the ground
    pub fn apply_miss(&mut self) {
        self.drain(MISS_THIRST_LOSS, MISS_HEALTH_LOSS);
    }

    /// A bug reached the leaves
    pub fn apply_nibble(&mut self) {
        self.drain(NIBBLE_THIRST_LOSS, NIBBLE_HEALTH_LOSS);
    }

    /// A bug was swatted by the player
    pub fn apply_swat(&mut self) {
        self.score += SWAT_SCORE;
    }

    /// Passive evaporation over `dt` frames
    pub fn decay(&mut self, dt: f32, difficulty: Difficulty) {
        let loss = THIRST_DECAY * difficulty.get() * dt.max(0.0);
        self.drain(loss, 0.0);
    }

    pub fn is_game_over(&self) -> bool {
        self.thirst <= 0.0 || self.health <= 0.0
    }

    fn drain(&mut self, thirst: f32, health: f32) {
        self.thirst = (self.thirst - thirst).max(0.0);
        self.health = (self.health - health).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_caps_thirst_and_scores() {
        let mut vitals = Vitals {
            thirst: 97.0,
            ..Default::default()
        };
        let mut difficulty = Difficulty::default();
        vitals.apply_catch(&mut difficulty);

        assert_eq!(vitals.score, 5);
        assert_eq!(vitals.thirst, 100.0);
        assert!((difficulty.get() - 1.006).abs() < 1e-6);

        vitals.thirst = 50.0;
        vitals.apply_catch(&mut difficulty);
        assert_eq!(vitals.thirst, 56.0);
        assert_eq!(vitals.score, 10);
    }

    #[test]
    fn test_miss_and_nibble_drain() {
        let mut vitals = Vitals::default();
        vitals.apply_miss();
        assert_eq!(vitals.thirst, 92.0);
        assert_eq!(vitals.health, 98.0);

        vitals.apply_nibble();
        assert_eq!(vitals.thirst, 86.0);
        assert_eq!(vitals.health, 86.0);
    }

    #[test]
    fn test_vitals_floor_at_zero() {
        let mut vitals = Vitals {
            score: 0,
            thirst: 3.0,
            health: 5.0,
        };
        vitals.apply_nibble();
        assert_eq!(vitals.thirst, 0.0);
        assert_eq!(vitals.health, 0.0);
        assert!(vitals.is_game_over());
    }

    #[test]
    fn test_decay_scales_with_difficulty() {
        let mut slow = Vitals::default();
        let mut fast = Vitals::default();
        let mut difficulty = Difficulty::default();
        slow.decay(10.0, difficulty);
        difficulty.bump(1.0);
        fast.decay(10.0, difficulty);

        assert!((slow.thirst - 99.93).abs() < 1e-4);
        assert!((fast.thirst - 99.86).abs() < 1e-4);
        assert_eq!(fast.health, 100.0);
    }

    #[test]
    fn test_swat_only_scores() {
        let mut vitals = Vitals::default();
        vitals.apply_swat();
        assert_eq!(vitals.score, 10);
        assert_eq!(vitals.thirst, 100.0);
        assert_eq!(vitals.health, 100.0);
    }

    #[test]
    fn test_difficulty_never_drops() {
        let mut difficulty = Difficulty::default();
        difficulty.bump(-0.5);
        assert_eq!(difficulty.get(), 1.0);
        difficulty.bump(0.25);
        assert_eq!(difficulty.get(), 1.25);
        difficulty.reset();
        assert_eq!(difficulty.get(), 1.0);
    }
}
