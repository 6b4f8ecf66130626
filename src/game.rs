//! Game composition root
//!
//! Owns the world, the registry, held input, the loop and the spawner, and
//! wires them together for whichever platform drives the frames.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::platform::InputState;
use crate::sim::{
    Canvas, DrawContext, Entity, EntityCounter, EntityRegistry, FramePhases, FrameReport, GameLoop,
    GamePhase, Player, SpawnDirector, StopHandle, TextSink, WorldState, update_pass,
};

/// A running game
pub struct Game {
    config: GameConfig,
    world: WorldState,
    registry: EntityRegistry,
    input: InputState,
    director: SpawnDirector,
    game_loop: GameLoop,
}

impl Game {
    /// Create a game with the counter and the player registered, in that order
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut registry = EntityRegistry::new();
        registry.push(Entity::EntityCounter(EntityCounter));
        registry.push(Entity::Player(Player::new(config.player_start, &config)));

        let world = WorldState::new(config.player_start, config.first_wave);
        let input = InputState::new(config.bindings.clone());
        let director = SpawnDirector::new(seed, &config)?;
        let game_loop = GameLoop::new(config.fixed_delta_ms, config.max_steps_per_frame)?;

        log::info!("Game initialized with seed: {}", seed);

        Ok(Self {
            config,
            world,
            registry,
            input,
            director,
            game_loop,
        })
    }

    /// Run one frame from `elapsed_ms` of real time
    pub fn frame(
        &mut self,
        elapsed_ms: f64,
        canvas: &mut dyn Canvas,
        text: &mut dyn TextSink,
    ) -> FrameReport {
        let mut phases = Phases {
            registry: &mut self.registry,
            world: &mut self.world,
            input: &self.input,
            config: &self.config,
            canvas,
            text,
        };
        let report = self.game_loop.run_frame(elapsed_ms, &mut phases);
        self.finish_frame(report)
    }

    /// Run one frame from an absolute timestamp (e.g. `requestAnimationFrame`)
    pub fn frame_at(
        &mut self,
        now_ms: f64,
        canvas: &mut dyn Canvas,
        text: &mut dyn TextSink,
    ) -> FrameReport {
        let mut phases = Phases {
            registry: &mut self.registry,
            world: &mut self.world,
            input: &self.input,
            config: &self.config,
            canvas,
            text,
        };
        let report = self.game_loop.frame_at(now_ms, &mut phases);
        self.finish_frame(report)
    }

    /// Stop after the frame that ended the game
    fn finish_frame(&mut self, mut report: FrameReport) -> FrameReport {
        if self.world.is_over() && report.keep_running {
            log::info!("Game over at wave {}", self.world.wave);
            self.game_loop.stop_handle().stop();
            report.keep_running = false;
        }
        report
    }

    /// Spawn the current wave now (interval timer callback)
    pub fn spawn_wave(&mut self) -> u32 {
        self.director
            .spawn_wave(&mut self.world, &mut self.registry, &self.config)
    }

    /// Spawn from elapsed real time (headless driving)
    pub fn advance_spawner(&mut self, elapsed_ms: f64) -> u32 {
        self.director
            .advance(elapsed_ms, &mut self.world, &mut self.registry, &self.config)
    }

    /// Draw every live entity without advancing time
    pub fn draw(&self, canvas: &mut dyn Canvas, text: &mut dyn TextSink) {
        draw_all(&self.registry, canvas, text);
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn spawn_period_ms(&self) -> f64 {
        self.director.period_ms()
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.game_loop.stop_handle()
    }

    /// Simulated milliseconds so far
    pub fn game_time(&self) -> f64 {
        self.game_loop.clock().game_time
    }
}

/// Clear, then draw live entities in registry order
fn draw_all(registry: &EntityRegistry, canvas: &mut dyn Canvas, text: &mut dyn TextSink) {
    canvas.clear();
    let mut ctx = DrawContext {
        canvas,
        text,
        live_entities: registry.live_count(),
    };
    for (_, entity) in registry.iter() {
        entity.draw(&mut ctx);
    }
}

/// Borrowed view of a game for the duration of one frame
struct Phases<'a> {
    registry: &'a mut EntityRegistry,
    world: &'a mut WorldState,
    input: &'a InputState,
    config: &'a GameConfig,
    canvas: &'a mut dyn Canvas,
    text: &'a mut dyn TextSink,
}

impl FramePhases for Phases<'_> {
    fn update(&mut self, dt: f32, game_time: f64) {
        update_pass(self.registry, self.world, self.input, self.config, dt, game_time);
    }

    fn draw(&mut self) {
        draw_all(self.registry, self.canvas, self.text);
    }
}
