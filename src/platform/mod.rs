//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held physical keys mapped to logical actions)

pub mod input;

pub use input::{Action, InputState, KeyBindings};
