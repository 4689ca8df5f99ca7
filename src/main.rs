//! Lunar Lander entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use lunar_lander::consts::MAX_SUBSTEPS;
    use lunar_lander::highscores::HighScoreEntry;
    use lunar_lander::renderer::{RenderState, scene};
    use lunar_lander::sim::{GamePhase, GameState, Outcome, TickInput, tick};
    use lunar_lander::ui::{BannerKind, HudReadout};
    use lunar_lander::{HighScores, Settings};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Current wall clock in seconds
    fn now_secs() -> f64 {
        js_sys::Date::now() / 1000.0
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        settings: Settings,
        high_scores: HighScores,
        /// Cosmetic randomness (stars, flame flicker)
        fx_rng: Pcg32,
        accumulator: f32,
        last_time: f64,
        /// Held keys plus the pending reset edge
        input: TickInput,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed, now_secs()),
                render_state: None,
                settings: Settings::load(),
                high_scores: HighScores::load(),
                fx_rng: Pcg32::seed_from_u64(seed ^ 0x5eed),
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                last_phase: GamePhase::Active,
            }
        }

        /// Run simulation ticks at the fixed rate
        fn update(&mut self, dt: f32) {
            let step = self.state.config.tick_seconds();
            self.accumulator += dt.min(0.1);

            let mut substeps = 0;
            while self.accumulator >= step && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, now_secs());
                self.accumulator -= step;
                substeps += 1;

                // Reset is edge-triggered
                self.input.reset = false;
            }

            let phase = self.state.phase;
            if phase != self.last_phase {
                if phase == GamePhase::Ended(Outcome::Landed) {
                    self.record_landing();
                }
                self.last_phase = phase;
            }
        }

        fn record_landing(&mut self) {
            let entry = HighScoreEntry {
                score: self.state.score,
                fuel: self.state.lander.fuel,
                seconds: self.state.elapsed(now_secs()),
                timestamp: js_sys::Date::now(),
            };
            if let Some(rank) = self.high_scores.add(entry) {
                log::info!("New best landing #{} ({} points)", rank, self.state.score);
                self.high_scores.save();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene(&self.state, &self.settings, &mut self.fx_rng);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud") {
                let class = if self.settings.show_hud { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }

            let hud = HudReadout::from_state(&self.state);
            for (id, text) in [
                ("hud-fuel", &hud.fuel),
                ("hud-velocity", &hud.velocity),
                ("hud-angle", &hud.angle),
            ] {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text.as_str()));
                }
            }

            if let Some(el) = document.get_element_by_id("hud-score") {
                match &hud.score {
                    Some(score) => {
                        el.set_text_content(Some(score.as_str()));
                        let _ = el.set_attribute("class", "success");
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            if let Some(el) = document.get_element_by_id("banner") {
                match &hud.banner {
                    Some(banner) => {
                        el.set_text_content(Some(banner.message));
                        let class = match banner.kind {
                            BannerKind::Success => "success",
                            BannerKind::Failure => "failure",
                        };
                        let _ = el.set_attribute("class", class);
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            if let Some(el) = document.get_element_by_id("best-score") {
                if self.high_scores.is_empty() {
                    let _ = el.set_attribute("class", "hidden");
                } else if let Some(best) = self.high_scores.top_score() {
                    el.set_text_content(Some(format!("Best: {}", best).as_str()));
                    let _ = el.set_attribute("class", "");
                }
            }
        }

        /// Drop held controls (e.g. when the window loses focus)
        fn release_keys(&mut self) {
            self.input = TickInput::default();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lunar Lander starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let screen = {
            let g = game.borrow();
            (g.state.config.screen_width, g.state.config.screen_height)
        };
        let render_state = RenderState::new(surface, &adapter, width, height, screen).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Lunar Lander running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: held controls and the reset edge
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.rotate_left = true,
                    "ArrowRight" => g.input.rotate_right = true,
                    "ArrowUp" => g.input.thrust = true,
                    "r" | "R" if !event.repeat() => g.input.reset = true,
                    key if !event.repeat() => {
                        // Display toggles (h, s, f)
                        if !g.settings.toggle_for_key(key) {
                            return;
                        }
                        g.settings.save();
                    }
                    _ => return,
                }
                event.prevent_default();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.rotate_left = false,
                    "ArrowRight" => g.input.rotate_right = false,
                    "ArrowUp" => g.input.thrust = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup never arrives, so release everything
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().release_keys();
                log::info!("Controls released (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.state.config.tick_seconds()
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lunar Lander (native) starting...");
    log::info!("Interactive play needs the browser build - run with `trunk serve`");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    scripted_descent(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Give up on the headless run after ten simulated minutes
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_TICKS: u64 = 60 * 60 * 10;

/// Headless run: lean toward the pad while holding the descent rate down
#[cfg(not(target_arch = "wasm32"))]
fn scripted_descent(seed: u64) {
    use lunar_lander::sim::{GameState, TickInput, tick};
    use lunar_lander::ui::HudReadout;

    let mut state = GameState::new(seed, 0.0);
    let step = state.config.tick_seconds() as f64;
    let pad_x = state.terrain.pad.center().x;
    log::info!("Seed {}: pad centre at x={}", seed, pad_x);

    while !state.is_game_over() {
        if state.time_ticks >= MAX_HEADLESS_TICKS {
            log::warn!("No touchdown after {} ticks, giving up", state.time_ticks);
            break;
        }
        let lander = &state.lander;
        let offset = pad_x - lander.pos.x;
        // Lean toward the pad, damping horizontal drift
        let target_angle = (offset * 0.05 - lander.vel.x * 10.0).clamp(-10.0, 10.0);
        let angle = lander.angle;
        let input = TickInput {
            rotate_left: angle > target_angle + 1.5,
            rotate_right: angle < target_angle - 1.5,
            thrust: lander.vel.y > 0.5,
            reset: false,
        };
        let now = (state.time_ticks + 1) as f64 * step;
        tick(&mut state, &input, now);
    }

    let hud = HudReadout::from_state(&state);
    log::info!("{:?} after {} ticks", state.phase, state.time_ticks);
    println!("{} | {} | {}", hud.fuel, hud.velocity, hud.angle);
    if let Some(banner) = hud.banner {
        println!("{}", banner.message);
    }
    if let Some(score) = hud.score {
        println!("{}", score);
    }
}
