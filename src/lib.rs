//! Square Survivors - a fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game loop, spawning)
//! - `platform`: Browser/native input abstraction
//! - `renderer`: WebGPU rendering of the abstract canvas primitives
//! - `config`: Data-driven game tuning
//! - `game`: Composition root tying the above together

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, RegistryError, RenderError};
pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const FIXED_DELTA_MS: f64 = 1000.0 / 60.0;

    /// Logical playfield dimensions
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 360.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 10.0;
    /// Units per millisecond
    pub const PLAYER_SPEED: f32 = 0.15;
    /// Twenty fixed ticks worth of real time between shots
    pub const FIRE_RATE_MS: f64 = FIXED_DELTA_MS * 20.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 0.5;
    /// Units per millisecond
    pub const BULLET_SPEED: f32 = 0.3;

    /// Survivor defaults
    pub const ENEMY_SIZE: f32 = 10.0;
    /// Distance covered per update on each stepping axis
    pub const ENEMY_STEP: f32 = 1.3;

    /// Wave spawning
    pub const SPAWN_PERIOD_MS: f64 = 3000.0;
    pub const SPAWN_RADIUS: f32 = 700.0;
    pub const FIRST_WAVE: u32 = 1;
}
