//! Platform abstraction layer
//!
//! Collects browser input between frames and hands it to the simulation as a
//! single `TickInput` per tick.

pub mod input;

pub use input::InputState;
