//! Rendering module
//!
//! `view` holds the pure HUD/plant math; `canvas` paints a `GameState` with
//! the Canvas 2D API (browser only).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use view::{
    HEART_COUNT, hearts_filled, plant_growth, splash_rgba, start_button_label, sway_degrees,
    thirst_bar_background, wilt_alpha,
};
