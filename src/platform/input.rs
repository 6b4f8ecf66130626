//! Keyboard state
//!
//! Tracks which physical keys are held right now. Keys are identified by the
//! browser's `KeyboardEvent.code` strings ("KeyA", "ArrowUp", ...) so the
//! layout does not matter. There is no event queue and no edge detection:
//! callers only ever ask "is this held at the moment".

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical actions the simulation queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    FireUp,
    FireRight,
    FireDown,
    FireLeft,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::FireUp,
        Action::FireRight,
        Action::FireDown,
        Action::FireLeft,
    ];
}

/// Physical key codes bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub fire_up: Vec<String>,
    pub fire_right: Vec<String>,
    pub fire_down: Vec<String>,
    pub fire_left: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let key = |code: &str| vec![code.to_string()];
        Self {
            move_left: key("KeyA"),
            move_right: key("KeyD"),
            move_up: key("KeyW"),
            move_down: key("KeyS"),
            fire_up: key("ArrowUp"),
            fire_right: key("ArrowRight"),
            fire_down: key("ArrowDown"),
            fire_left: key("ArrowLeft"),
        }
    }
}

impl KeyBindings {
    /// Key codes that trigger an action
    pub fn codes(&self, action: Action) -> &[String] {
        match action {
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::MoveUp => &self.move_up,
            Action::MoveDown => &self.move_down,
            Action::FireUp => &self.fire_up,
            Action::FireRight => &self.fire_right,
            Action::FireDown => &self.fire_down,
            Action::FireLeft => &self.fire_left,
        }
    }

    /// Whether any action is bound to this key code
    pub fn is_bound(&self, code: &str) -> bool {
        Action::ALL
            .iter()
            .any(|&action| self.codes(action).iter().any(|c| c == code))
    }
}

/// Live set of held keys plus the bindings used to interpret them
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
    bindings: KeyBindings,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            held: HashSet::new(),
            bindings,
        }
    }

    /// Record a key press (repeats are harmless)
    pub fn press(&mut self, code: &str) {
        if !self.held.contains(code) {
            self.held.insert(code.to_string());
        }
    }

    /// Record a key release
    pub fn release(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Forget every held key (focus lost, so releases will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Is any key bound to `action` currently held
    pub fn is_action_held(&self, action: Action) -> bool {
        self.bindings
            .codes(action)
            .iter()
            .any(|code| self.held.contains(code))
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}
