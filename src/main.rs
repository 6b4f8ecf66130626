//! Square Survivors entry point
//!
//! Handles platform-specific initialization and drives the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{FocusEvent, HtmlCanvasElement, KeyboardEvent};

    use square_survivors::renderer::{RenderState, ShapeBatch};
    use square_survivors::{Game, GameConfig, RenderError};

    /// Browser-side state wrapped around the simulation
    struct App {
        game: Game,
        render_state: RenderState,
        batch: ShapeBatch,
        hud_text: String,
        /// `setInterval` handle of the wave spawner
        spawn_interval: Option<i32>,
    }

    impl App {
        /// Render the batch the last frame produced
        fn render(&mut self) {
            match self.render_state.render(self.batch.vertices()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update the entity counter element
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("entities") {
                el.set_text_content(Some(&self.hud_text));
            }
        }

        fn stop_spawning(&mut self) {
            if let (Some(handle), Some(window)) = (self.spawn_interval.take(), web_sys::window()) {
                window.clear_interval_with_handle(handle);
                log::info!("Spawner stopped");
            }
        }
    }

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    async fn init_renderer(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
        config: &GameConfig,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (config.arena_width, config.arena_height),
        )
        .await
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_error)?;

        log::info!("Square Survivors starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Backing store at device resolution
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config_json = document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content());
        let config = GameConfig::from_json_or_default(config_json.as_deref());

        let render_state = init_renderer(&canvas, width, height, &config)
            .await
            .map_err(js_error)?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(config, seed).map_err(js_error)?;
        let period_ms = game.spawn_period_ms();

        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            batch: ShapeBatch::new(),
            hud_text: String::new(),
            spawn_interval: None,
        }));

        setup_input_handlers(&window, app.clone());
        setup_spawner(&window, app.clone(), period_ms)?;

        request_animation_frame(app);

        log::info!("Square Survivors running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                let input = app.game.input_mut();
                let code = event.code();
                // Keep arrow keys from scrolling the page
                if input.bindings().is_bound(&code) {
                    event.prevent_default();
                }
                input.press(&code);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input_mut().release(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Losing focus swallows the key ups
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                app.borrow_mut().game.input_mut().clear();
            });
            let _ = window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_spawner(
        window: &web_sys::Window,
        app: Rc<RefCell<App>>,
        period_ms: f64,
    ) -> Result<(), JsValue> {
        let spawner = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().game.spawn_wave();
            })
        };
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            spawner.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        spawner.forget();

        app.borrow_mut().spawn_interval = Some(handle);
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_running = {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;

            let report = app.game.frame_at(time, &mut app.batch, &mut app.hud_text);
            app.render();
            app.update_hud();

            if !report.keep_running {
                app.stop_spawning();
            }
            report.keep_running
        };

        if keep_running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use square_survivors::renderer::ShapeBatch;
    use square_survivors::sim::GamePhase;
    use square_survivors::{ConfigError, Game, GameConfig};

    const DEMO_SEED: u64 = 0x5eed;
    /// Real time fed per frame
    const FRAME_MS: f64 = 16.0;
    /// Two minutes at ~60 fps
    const MAX_FRAMES: u32 = 7500;

    /// Keys held from a frame offset within each lap of the script
    const SCRIPT: &[(u32, &[&str])] = &[
        (0, &["KeyD", "ArrowRight"]),
        (120, &["KeyS", "ArrowUp"]),
        (240, &["KeyA", "ArrowLeft"]),
        (360, &["KeyW", "ArrowDown"]),
    ];
    const LAP_FRAMES: u32 = 480;

    /// Outcome of a headless session
    #[derive(Debug)]
    pub struct Summary {
        pub frames: u32,
        pub game_time_ms: f64,
        pub waves_spawned: u32,
        pub survivors_spawned: u32,
        pub live_entities: usize,
        pub phase: GamePhase,
    }

    fn keys_for(frame: u32) -> &'static [&'static str] {
        let offset = frame % LAP_FRAMES;
        SCRIPT
            .iter()
            .rev()
            .find(|(start, _)| *start <= offset)
            .map(|&(_, keys)| keys)
            .unwrap_or_default()
    }

    /// Drive a game with scripted input until it ends or time runs out
    pub fn run(config: GameConfig) -> Result<Summary, ConfigError> {
        let first_wave = config.first_wave;
        let mut game = Game::new(config, DEMO_SEED)?;
        let mut batch = ShapeBatch::new();
        let mut hud = String::new();

        let mut survivors_spawned = 0;
        let mut frames = 0;
        let mut held: &[&str] = &[];

        while frames < MAX_FRAMES {
            let keys = keys_for(frames);
            if keys != held {
                let input = game.input_mut();
                input.clear();
                for code in keys {
                    input.press(code);
                }
                held = keys;
            }

            survivors_spawned += game.advance_spawner(FRAME_MS);
            let report = game.frame(FRAME_MS, &mut batch, &mut hud);
            frames += 1;

            if frames % 600 == 0 {
                log::debug!(
                    "frame {}: {} live, {} vertices",
                    frames,
                    hud,
                    batch.vertices().len()
                );
            }
            if !report.keep_running {
                break;
            }
        }

        Ok(Summary {
            frames,
            game_time_ms: game.game_time(),
            waves_spawned: game.world().wave - first_wave,
            survivors_spawned,
            live_entities: game.registry().live_count(),
            phase: game.phase(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use square_survivors::GameConfig;

    env_logger::init();
    log::info!("Square Survivors (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let config_json = std::env::args()
        .nth(1)
        .and_then(|path| match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Cannot read config {}: {}", path, e);
                None
            }
        });
    let config = GameConfig::from_json_or_default(config_json.as_deref());

    match headless::run(config) {
        Ok(summary) => {
            log::info!("Session finished: {:?}", summary);
            println!(
                "{:?} after {} frames ({:.0} ms simulated): {} waves, {} survivors spawned, {} entities live",
                summary.phase,
                summary.frames,
                summary.game_time_ms,
                summary.waves_spawned,
                summary.survivors_spawned,
                summary.live_entities,
            );
        }
        Err(e) => {
            log::error!("Cannot start game: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
