//! Game tuning and key bindings
//!
//! Every field has a default matching the classic game, so a config document
//! only needs to name what it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::platform::KeyBindings;

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Loop ===
    /// Simulation step in milliseconds
    pub fixed_delta_ms: f64,
    /// Cap on update passes per frame (None = catch up fully)
    pub max_steps_per_frame: Option<u32>,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_start: Vec2,
    pub player_size: f32,
    pub player_speed: f32,
    pub fire_rate_ms: f64,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_radius: f32,

    // === Survivors ===
    pub enemy_size: f32,
    pub enemy_step: f32,

    // === Waves ===
    pub spawn_period_ms: f64,
    pub spawn_radius: f32,
    pub first_wave: u32,

    // === Input ===
    pub bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_delta_ms: FIXED_DELTA_MS,
            max_steps_per_frame: None,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_start: Vec2::ZERO,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            fire_rate_ms: FIRE_RATE_MS,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,

            enemy_size: ENEMY_SIZE,
            enemy_step: ENEMY_STEP,

            spawn_period_ms: SPAWN_PERIOD_MS,
            spawn_radius: SPAWN_RADIUS,
            first_wave: FIRST_WAVE,

            bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject non-positive speeds, sizes and periods
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f64); 12] = [
            ("fixed_delta_ms", self.fixed_delta_ms),
            ("arena_width", self.arena_width.into()),
            ("arena_height", self.arena_height.into()),
            ("player_size", self.player_size.into()),
            ("player_speed", self.player_speed.into()),
            ("fire_rate_ms", self.fire_rate_ms),
            ("bullet_speed", self.bullet_speed.into()),
            ("bullet_radius", self.bullet_radius.into()),
            ("enemy_size", self.enemy_size.into()),
            ("enemy_step", self.enemy_step.into()),
            ("spawn_period_ms", self.spawn_period_ms),
            ("spawn_radius", self.spawn_radius.into()),
        ];

        for (field, value) in checks {
            ensure_positive(field, value)?;
        }
        ensure_step_cap(self.max_steps_per_frame)
    }

    /// Load a config document, falling back to defaults when it is bad
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded game config");
                config
            }
            Some(Err(e)) => {
                log::warn!("Ignoring game config: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default game config");
                Self::default()
            }
        }
    }
}

/// Reject a value that is not strictly positive and finite
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::OutOfBoundsConfiguration { field, value });
    }
    Ok(())
}

/// Reject a step cap of zero
pub(crate) fn ensure_step_cap(max_steps_per_frame: Option<u32>) -> Result<(), ConfigError> {
    if max_steps_per_frame == Some(0) {
        return Err(ConfigError::OutOfBoundsConfiguration {
            field: "max_steps_per_frame",
            value: 0.0,
        });
    }
    Ok(())
}
