//! World state shared by entity updates
//!
//! Everything one entity publishes for another to read lives here and is
//! passed by reference into each update, never held in globals.

use glam::Vec2;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// A survivor reached the player
    GameOver,
}

/// Simulation and real-time accumulators, both in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameClock {
    /// Simulated time, advanced by one fixed step per update pass
    pub game_time: f64,
    /// Real time not yet spent on update passes
    pub accumulator: f64,
}

/// Mutable state visible to every entity during an update pass
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Mirror of the player's position, written by the player each update
    pub player_position: Vec2,
    /// Number of survivors the next spawn cycle brings
    pub wave: u32,
    pub phase: GamePhase,
    /// Update passes run so far
    pub time_ticks: u64,
}

impl WorldState {
    pub fn new(player_position: Vec2, first_wave: u32) -> Self {
        Self {
            player_position,
            wave: first_wave,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
