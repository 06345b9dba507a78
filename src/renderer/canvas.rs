//! Canvas 2D painter
//!
//! Reads a `GameState` snapshot and never mutates it. Drawing calls that can
//! fail are fire-and-forget; a missed primitive only costs one frame.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::view::{HEART_COUNT, hearts_filled, plant_growth, splash_rgba, sway_degrees, wilt_alpha};
use crate::sim::GameState;

/// Leaf sprite size at full growth
const LEAF_WIDTH: f64 = 320.0;
const LEAF_HEIGHT: f64 = 220.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    leaves: HtmlImageElement,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, leaf_src: &str) -> Result<Self, JsValue> {
        let leaves = HtmlImageElement::new()?;
        leaves.set_src(leaf_src);
        Ok(Self { ctx, leaves })
    }

    /// Paint one frame: sky, drops, pot, plant, bugs, splashes, hearts
    pub fn render(&self, state: &GameState, now_ms: f64) {
        let w = f64::from(state.field.width);
        let h = f64::from(state.field.height);

        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.draw_sky(w, h);
        self.draw_drops(state);
        self.draw_pot(state);
        self.draw_plant(state, now_ms);
        self.draw_bugs(state);
        self.draw_splashes(state);
        self.draw_hearts(state);
    }

    fn draw_sky(&self, w: f64, h: f64) {
        let sky = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        sky.add_color_stop(0.0, "#9fe6ff").ok();
        sky.add_color_stop(1.0, "#d3f7d8").ok();
        self.ctx.set_fill_style_canvas_gradient(&sky);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn draw_drops(&self, state: &GameState) {
        let ctx = &self.ctx;
        for drop in &state.drops {
            let (x, y, r) = (
                f64::from(drop.pos.x),
                f64::from(drop.pos.y),
                f64::from(drop.radius),
            );
            ctx.begin_path();
            if let Ok(grd) = ctx.create_radial_gradient(x, y, 1.0, x, y, r) {
                grd.add_color_stop(0.0, "rgba(255,255,255,0.9)").ok();
                grd.add_color_stop(0.2, "rgba(140,220,255,0.95)").ok();
                grd.add_color_stop(1.0, "rgba(40,160,220,0.7)").ok();
                ctx.set_fill_style_canvas_gradient(&grd);
            }
            ctx.ellipse(x, y, r * 0.6, r, 0.0, 0.0, PI * 2.0).ok();
            ctx.fill();

            // tail
            ctx.set_fill_style_str("rgba(255,255,255,0.08)");
            ctx.fill_rect(x - r * 0.15, y - r * 1.5, r * 0.3, r * 0.8);
        }
    }

    fn draw_pot(&self, state: &GameState) {
        let pot = &state.pot;
        let (x, y, w, h) = (
            f64::from(pot.x),
            f64::from(pot.y),
            f64::from(pot.w),
            f64::from(pot.h),
        );
        self.ctx.set_fill_style_str("#6a3b20");
        self.ctx.fill_rect(x, y, w, h);
        // soil
        self.ctx.set_fill_style_str("#3f2715");
        self.ctx.fill_rect(x + 6.0, y - 12.0, w - 12.0, 12.0);
    }

    fn draw_plant(&self, state: &GameState, now_ms: f64) {
        let ctx = &self.ctx;
        let growth = plant_growth(state.vitals.score);
        let leaf_w = LEAF_WIDTH * f64::from(growth);
        let leaf_h = LEAF_HEIGHT * f64::from(growth);
        let target = state.field.leaf_target();

        ctx.save();
        ctx.translate(
            f64::from(target.x) - leaf_w / 2.0,
            f64::from(target.y) - leaf_h / 2.0,
        )
        .ok();
        ctx.rotate(f64::from(sway_degrees(now_ms, growth)).to_radians()).ok();
        if self.leaves.complete() {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                &self.leaves,
                0.0,
                0.0,
                leaf_w,
                leaf_h,
            )
            .ok();
        }
        if let Some(alpha) = wilt_alpha(&state.vitals) {
            let alpha = f64::from(alpha);
            ctx.set_fill_style_str(&format!("rgba(120,60,20,{})", alpha));
            ctx.fill_rect(0.0, 0.0, leaf_w, leaf_h);
            // desaturate
            ctx.set_fill_style_str(&format!("rgba(80,80,80,{})", alpha * 0.25));
            ctx.fill_rect(0.0, 0.0, leaf_w, leaf_h);
        }
        ctx.restore();
    }

    fn draw_bugs(&self, state: &GameState) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#222");
        for bug in &state.bugs {
            let (x, y) = (f64::from(bug.pos.x), f64::from(bug.pos.y));
            ctx.begin_path();
            ctx.ellipse(x, y, 10.0, 8.0, 0.0, 0.0, PI * 2.0).ok();
            ctx.fill();
            // wings
            ctx.fill_rect(x - 5.0, y - 12.0, 10.0, 3.0);
        }
    }

    fn draw_splashes(&self, state: &GameState) {
        let ctx = &self.ctx;
        for splash in &state.splashes {
            ctx.begin_path();
            ctx.set_fill_style_str(splash_rgba(splash.kind));
            ctx.set_global_alpha(f64::from(splash.alpha()));
            ctx.arc(
                f64::from(splash.pos.x),
                f64::from(splash.pos.y),
                f64::from(splash.radius),
                0.0,
                PI * 2.0,
            )
            .ok();
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
    }

    fn draw_hearts(&self, state: &GameState) {
        let ctx = &self.ctx;
        let filled = hearts_filled(state.vitals.health);
        for i in 0..HEART_COUNT {
            let hx = 14.0 + i as f64 * 22.0;
            let hy = 12.0;
            ctx.begin_path();
            ctx.set_fill_style_str(if i < filled {
                "#ff6666"
            } else {
                "rgba(255,255,255,0.25)"
            });
            ctx.arc(hx + 4.0, hy + 6.0, 5.0, 0.0, PI * 2.0).ok();
            ctx.arc(hx + 10.0, hy + 6.0, 5.0, 0.0, PI * 2.0).ok();
            ctx.move_to(hx + 1.0, hy + 10.0);
            ctx.line_to(hx + 14.0, hy + 10.0);
            ctx.fill();
        }
    }
}
