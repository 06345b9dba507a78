//! Rain Drop Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, KeyboardEvent,
        MouseEvent, TouchEvent,
    };

    use rain_drop_rush::audio::AudioManager;
    use rain_drop_rush::consts::*;
    use rain_drop_rush::platform::InputState;
    use rain_drop_rush::renderer::{CanvasRenderer, start_button_label, thirst_bar_background};
    use rain_drop_rush::settings::Settings;
    use rain_drop_rush::sim::{GameState, Playfield, SeededRandom, ramp_difficulty, start, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: SeededRandom,
        input: InputState,
        audio: AudioManager,
        settings: Settings,
        renderer: CanvasRenderer,
        document: Document,
        last_time: f64,
    }

    impl Game {
        /// Run one simulation tick from the queued input
        fn update(&mut self, now: f64) {
            let dt = if self.last_time > 0.0 {
                (((now - self.last_time) / FRAME_MS) as f32).clamp(0.0, MAX_FRAME_DT)
            } else {
                1.0
            };
            self.last_time = now;

            let input = self.input.take_tick_input();
            tick(&mut self.state, &input, &mut self.rng, now, dt);

            let events = self.state.drain_events();
            self.audio.play_events(&events);
        }

        fn render(&self, now: f64) {
            self.renderer.render(&self.state, now);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            if let Some(el) = self.document.get_element_by_id("scoreVal") {
                el.set_text_content(Some(&self.state.vitals.score.to_string()));
            }

            if let Some(fill) = self
                .document
                .get_element_by_id("thirstFill")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let thirst = self.state.vitals.thirst;
                let style = fill.style();
                let _ = style.set_property("width", &format!("{}%", thirst));
                let _ = style.set_property("background", &thirst_bar_background(thirst));
            }

            if let Some(btn) = self.document.get_element_by_id("startBtn") {
                btn.set_text_content(Some(start_button_label(&self.state)));
            }
        }

        fn start(&mut self) {
            let now = js_sys::Date::now();
            if start(&mut self.state, now) {
                self.input.clear();
                self.last_time = now;
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.set_muted(muted);
            self.settings.save();
            if let Some(btn) = self.document.get_element_by_id("muteBtn") {
                btn.set_text_content(Some(mute_label(muted)));
            }
        }
    }

    fn mute_label(muted: bool) -> &'static str {
        if muted { "🔈" } else { "🔊" }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Rain Drop Rush starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        // Internal resolution stays fixed; CSS scales the canvas
        let field = Playfield::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(field),
            rng: SeededRandom::new(seed),
            input: InputState::new(),
            audio: AudioManager::from_settings(&settings),
            renderer: CanvasRenderer::new(ctx, "assets/monstera.png")?,
            settings,
            document: document.clone(),
            last_time: 0.0,
        }));

        log::info!(
            "Game initialized with seed {} on {}x{} canvas",
            seed,
            field.width,
            field.height
        );

        setup_input_handlers(&canvas, game.clone())?;
        setup_buttons(&document, game.clone())?;
        setup_difficulty_ramp(game.clone())?;

        {
            let g = game.borrow();
            if let Some(btn) = document.get_element_by_id("muteBtn") {
                btn.set_text_content(Some(mute_label(g.settings.muted)));
            }
            g.update_hud();
        }

        request_animation_frame(game);

        log::info!("Rain Drop Rush running!");
        Ok(())
    }

    /// Map a client-space point onto the canvas' internal resolution
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let sx = if rect.width() > 0.0 {
            canvas.width() as f64 / rect.width()
        } else {
            1.0
        };
        let sy = if rect.height() > 0.0 {
            canvas.height() as f64 / rect.height()
        } else {
            1.0
        };
        Vec2::new(
            ((client_x as f64 - rect.left()) * sx) as f32,
            ((client_y as f64 - rect.top()) * sy) as f32,
        )
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard state map
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_down(&event.key());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch: left half nudges left, right half nudges right
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point =
                        canvas_point(&canvas_clone, touch.client_x() as f32, touch.client_y() as f32);
                    let width = canvas_clone.width() as f32;
                    game.borrow_mut().input.tap(point.x, width);
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click to swat bugs
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point =
                    canvas_point(&canvas_clone, event.client_x() as f32, event.client_y() as f32);
                game.borrow_mut().input.click(point);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("startBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        } else {
            log::warn!("No start button found");
        }

        if let Some(btn) = document.get_element_by_id("muteBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().toggle_mute();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Second scheduled task: raise difficulty on a fixed wall-clock period.
    /// It shares the `RefCell` with the frame loop, so the two never interleave.
    fn setup_difficulty_ramp(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            ramp_difficulty(&mut game.borrow_mut().state);
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            DIFFICULTY_RAMP_INTERVAL_MS as i32,
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            // Spawn gates run on wall-clock time, like the ramp timer
            let now = js_sys::Date::now();
            g.update(now);
            g.render(now);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rain Drop Rush (native) starting...");
    log::info!("The playable version runs in the browser; running a headless autoplay session");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    autoplay(seed);
}

/// Play one session with a simple bot at a fixed 60 Hz and report the result
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(seed: u64) {
    use rain_drop_rush::audio::AudioManager;
    use rain_drop_rush::consts::*;
    use rain_drop_rush::platform::InputState;
    use rain_drop_rush::sim::{
        GameState, Playfield, SeededRandom, ramp_difficulty, start, tick,
    };

    const MAX_FRAMES: u64 = 60 * 60 * 10;
    let ramp_every = (f64::from(DIFFICULTY_RAMP_INTERVAL_MS) / FRAME_MS).round() as u64;

    let mut state = GameState::new(Playfield::default());
    let mut rng = SeededRandom::new(seed);
    let mut input = InputState::new();
    let mut audio = AudioManager::new();

    start(&mut state, 0.0);
    let mut frame = 0;
    while state.is_running() && frame < MAX_FRAMES {
        frame += 1;
        let now = frame as f64 * FRAME_MS;

        // Chase the lowest drop and swat anything near the leaves
        input.clear();
        if let Some(drop) = state.drops.iter().max_by(|a, b| a.pos.y.total_cmp(&b.pos.y)) {
            let center = state.pot.center().x;
            if drop.pos.x < center - 4.0 {
                input.key_down("ArrowLeft");
            } else if drop.pos.x > center + 4.0 {
                input.key_down("ArrowRight");
            }
        }
        let target = state.field.leaf_target();
        for bug in &state.bugs {
            if bug.pos.distance(target) < 120.0 {
                input.click(bug.pos);
            }
        }

        tick(&mut state, &input.take_tick_input(), &mut rng, now, 1.0);
        if frame % ramp_every == 0 {
            ramp_difficulty(&mut state);
        }
        audio.play_events(&state.drain_events());
    }

    println!("seed:       {}", rng.seed());
    println!("frames:     {}", frame);
    println!("score:      {}", state.vitals.score);
    println!("thirst:     {:.1}", state.vitals.thirst);
    println!("health:     {:.1}", state.vitals.health);
    println!("difficulty: {:.3}", state.difficulty.get());
    println!("cues:       {}", audio.played());
    match state.last_session {
        Some(summary) => println!("wilted after {:.1}s", summary.elapsed_secs),
        None => println!("still alive when the run ended"),
    }
}
