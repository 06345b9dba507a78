//! Presentation math shared by the canvas painter and the DOM HUD

use crate::sim::{GameState, SplashKind, Vitals};

/// Hearts shown in the HUD, 20 health each
pub const HEART_COUNT: usize = 5;

/// Below this thirst or health the plant starts to wilt
const WILT_THRESHOLD: f32 = 30.0;

/// Plant scale: half size at zero score, full size from 150 points
pub fn plant_growth(score: u64) -> f32 {
    (0.5 + score as f32 / 300.0).min(1.0)
}

/// Gentle sway angle in degrees; bigger plants sway more
pub fn sway_degrees(now_ms: f64, growth: f32) -> f32 {
    (now_ms / 700.0).sin() as f32 * 4.0 * (0.5 + growth * 0.5)
}

/// Brown overlay opacity when the plant is struggling
pub fn wilt_alpha(vitals: &Vitals) -> Option<f32> {
    let worst = vitals.thirst.min(vitals.health);
    (worst < WILT_THRESHOLD).then(|| ((WILT_THRESHOLD - worst) / 40.0).min(0.7))
}

pub fn hearts_filled(health: f32) -> usize {
    ((health.max(0.0) / 20.0).ceil() as usize).min(HEART_COUNT)
}

/// CSS background for the thirst bar: cyan into a thirst-tinted green
pub fn thirst_bar_background(thirst: f32) -> String {
    let t = thirst.clamp(0.0, 100.0) / 100.0;
    let green = ((115.0 + t * 120.0).floor() as u32).min(255);
    let blue = ((150.0 + t * 100.0).floor() as u32).min(255);
    format!(
        "linear-gradient(90deg,rgb(75,211,255), rgb({},{},180))",
        green, blue
    )
}

/// Fill colour for a splash
pub fn splash_rgba(kind: SplashKind) -> &'static str {
    match kind {
        SplashKind::Catch => "rgba(90,210,255,0.9)",
        SplashKind::Miss => "rgba(180,100,80,0.6)",
        SplashKind::Nibble => "rgba(200,60,60,0.9)",
        SplashKind::Swat => "rgba(255,200,0,0.9)",
    }
}

pub fn start_button_label(state: &GameState) -> &'static str {
    if state.is_running() {
        "Running..."
    } else if state.last_session.is_some() {
        "Game Over — Restart"
    } else {
        "Start"
    }
}
