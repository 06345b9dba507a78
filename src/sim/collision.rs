//! Containment and proximity tests
//!
//! Drops are tested as a vertical band (radius as half-height) against the pot
//! rectangle and as a point against its horizontal span.

use glam::Vec2;

use super::state::{Bug, Playfield, Pot, Raindrop};
use crate::consts::*;

/// Drop overlaps the pot's catch band
pub fn drop_in_pot(drop: &Raindrop, pot: &Pot) -> bool {
    let Vec2 { x, y } = drop.pos;
    y + drop.radius > pot.y && y - drop.radius < pot.y + pot.h && x > pot.x && x < pot.x + pot.w
}

/// Drop has fallen far enough below the floor to count as lost
pub fn drop_missed(drop: &Raindrop, field: &Playfield) -> bool {
    drop.pos.y > field.height + DROP_MISS_MARGIN
}

/// Bug is close enough to the leaves to bite
pub fn bug_reaches_leaves(bug: &Bug, field: &Playfield) -> bool {
    bug.pos.distance(field.leaf_target()) < NIBBLE_RADIUS
}

/// Bug has crawled out past either side
pub fn bug_offscreen(bug: &Bug, field: &Playfield) -> bool {
    bug.pos.x < -BUG_CULL_MARGIN || bug.pos.x > field.width + BUG_CULL_MARGIN
}

/// Index of the bug a click lands on, searching from the newest bug
pub fn swat_target(bugs: &[Bug], click: Vec2) -> Option<usize> {
    bugs.iter().rposition(|bug| bug.pos.distance(click) < SWAT_RADIUS)
}
