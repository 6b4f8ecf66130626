//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order)
//! - No rendering or platform dependencies beyond held-key state and the
//!   abstract draw seams

pub mod collision;
pub mod draw;
pub mod entity;
pub mod geometry;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::first_enemy_hit;
pub use draw::{Canvas, DrawContext, Rgba, TextSink, palette};
pub use entity::{
    Bullet, Enemy, Entity, EntityCounter, EntityKind, Player, UpdateContext, UpdateOutcome,
};
pub use geometry::{box_corners, quads_touch, rectangle_contains, signed_triangle_area};
pub use registry::EntityRegistry;
pub use spawn::SpawnDirector;
pub use state::{GameClock, GamePhase, WorldState};
pub use tick::{FramePhases, FrameReport, GameLoop, StopHandle, update_pass};
