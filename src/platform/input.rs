//! Keyboard, touch and click collection

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::{Nudge, TickInput};

const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];

/// Input gathered from DOM events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Keys currently held, by `KeyboardEvent.key`
    held: HashSet<String>,
    /// Taps not yet consumed
    nudges: Vec<Nudge>,
    /// Clicks not yet consumed (playfield coordinates)
    clicks: Vec<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Touch at `x` on a surface `width` wide: left half moves left
    pub fn tap(&mut self, x: f32, width: f32) {
        let nudge = if x < width / 2.0 {
            Nudge::Left
        } else {
            Nudge::Right
        };
        self.nudges.push(nudge);
    }

    pub fn click(&mut self, pos: Vec2) {
        self.clicks.push(pos);
    }

    /// Forget everything, e.g. when the page loses focus
    pub fn clear(&mut self) {
        self.held.clear();
        self.nudges.clear();
        self.clicks.clear();
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.held.contains(*k))
    }

    /// Snapshot held keys and drain one-shot events into a tick's input
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            move_left: self.any_held(&LEFT_KEYS),
            move_right: self.any_held(&RIGHT_KEYS),
            nudges: std::mem::take(&mut self.nudges),
            swats: std::mem::take(&mut self.clicks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_persist_between_ticks() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft");
        assert!(input.take_tick_input().move_left);
        assert!(input.take_tick_input().move_left);

        input.key_up("ArrowLeft");
        input.key_down("d");
        let tick = input.take_tick_input();
        assert!(!tick.move_left);
        assert!(tick.move_right);
    }

    #[test]
    fn test_one_shots_drain() {
        let mut input = InputState::new();
        input.tap(10.0, 480.0);
        input.tap(300.0, 480.0);
        input.click(Vec2::new(5.0, 6.0));

        let tick = input.take_tick_input();
        assert_eq!(tick.nudges, vec![Nudge::Left, Nudge::Right]);
        assert_eq!(tick.swats, vec![Vec2::new(5.0, 6.0)]);

        let tick = input.take_tick_input();
        assert!(tick.nudges.is_empty());
        assert!(tick.swats.is_empty());
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut input = InputState::new();
        input.key_down("Enter");
        input.key_down("w");
        let tick = input.take_tick_input();
        assert!(!tick.move_left && !tick.move_right);
    }

    #[test]
    fn test_clear_releases_keys() {
        let mut input = InputState::new();
        input.key_down("a");
        input.tap(0.0, 100.0);
        input.clear();
        let tick = input.take_tick_input();
        assert!(!tick.move_left);
        assert!(tick.nudges.is_empty());
    }
}
