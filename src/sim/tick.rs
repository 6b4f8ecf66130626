//! Fixed timestep simulation tick
//!
//! [`GameLoop`] turns variable frame times into a whole number of fixed update
//! passes followed by exactly one draw. [`update_pass`] is one such pass over
//! the registry.

use std::cell::Cell;
use std::rc::Rc;

use super::collision::first_enemy_hit;
use super::entity::UpdateContext;
use super::registry::EntityRegistry;
use super::state::{GameClock, GamePhase, WorldState};
use crate::config::{GameConfig, ensure_positive, ensure_step_cap};
use crate::error::ConfigError;
use crate::platform::InputState;

/// The two phases a frame drives
pub trait FramePhases {
    /// One fixed step; `game_time` already includes it
    fn update(&mut self, dt: f32, game_time: f64);
    fn draw(&mut self);
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Update passes run (draws are always exactly one)
    pub updates: u32,
    /// False once the loop has been stopped; do not schedule another frame
    pub keep_running: bool,
}

/// Cancels a running loop; checked once per completed frame
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Accumulator-based fixed timestep scheduler
#[derive(Debug)]
pub struct GameLoop {
    fixed_delta: f64,
    /// Maximum substeps per frame to prevent spiral of death
    max_steps: Option<u32>,
    clock: GameClock,
    last_time: Option<f64>,
    stop: StopHandle,
}

impl GameLoop {
    /// Fails unless `fixed_delta_ms` is positive and finite and the cap is not zero
    pub fn new(
        fixed_delta_ms: f64,
        max_steps_per_frame: Option<u32>,
    ) -> Result<Self, ConfigError> {
        ensure_positive("fixed_delta_ms", fixed_delta_ms)?;
        ensure_step_cap(max_steps_per_frame)?;

        Ok(Self {
            fixed_delta: fixed_delta_ms,
            max_steps: max_steps_per_frame,
            clock: GameClock::default(),
            last_time: None,
            stop: StopHandle::default(),
        })
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn clock(&self) -> GameClock {
        self.clock
    }

    /// Spend `elapsed_ms` of real time on update passes, then draw once
    pub fn run_frame(&mut self, elapsed_ms: f64, phases: &mut impl FramePhases) -> FrameReport {
        self.clock.accumulator += elapsed_ms.max(0.0);

        let mut updates = 0;
        while self.clock.accumulator >= self.fixed_delta {
            if self.max_steps.is_some_and(|cap| updates >= cap) {
                break;
            }
            self.clock.game_time += self.fixed_delta;
            phases.update(self.fixed_delta as f32, self.clock.game_time);
            self.clock.accumulator -= self.fixed_delta;
            updates += 1;
        }

        // Always draw, even when no update ran
        phases.draw();

        FrameReport {
            updates,
            keep_running: !self.stop.is_stopped(),
        }
    }

    /// Like [`run_frame`](Self::run_frame) but from an absolute timestamp.
    /// The first call only establishes the baseline.
    pub fn frame_at(&mut self, now_ms: f64, phases: &mut impl FramePhases) -> FrameReport {
        let elapsed = self.last_time.map_or(0.0, |last| now_ms - last);
        self.last_time = Some(now_ms);
        self.run_frame(elapsed, phases)
    }
}

/// Skip a removal that was already made this pass
fn remove(registry: &mut EntityRegistry, index: usize) {
    if let Err(e) = registry.mark_for_removal(index) {
        log::debug!("Skipping removal: {}", e);
    }
}

/// Advance every live entity by one fixed step
///
/// Entities are visited once each, in registry order, with indices stable for
/// the whole pass. Removals are tagged as they happen and compacted at the
/// end; entities spawned during the pass wait for the next one.
pub fn update_pass(
    registry: &mut EntityRegistry,
    world: &mut WorldState,
    input: &InputState,
    config: &GameConfig,
    dt: f32,
    game_time: f64,
) {
    if world.is_over() {
        return;
    }
    world.time_ticks += 1;

    let len = registry.len();
    for index in 0..len {
        if !registry.is_live(index) {
            continue;
        }
        let Some(entity) = registry.get_mut(index) else {
            continue;
        };

        let mut ctx = UpdateContext {
            dt,
            game_time,
            input,
            world: &mut *world,
            config,
        };
        let outcome = entity.update(&mut ctx);

        if outcome.remove_self {
            remove(registry, index);
        }

        if let Some(probe) = outcome.probe {
            if let Some(hit) = first_enemy_hit(registry, probe) {
                remove(registry, hit);
                remove(registry, index);
            }
        }

        if let Some(spawned) = outcome.spawn {
            registry.push(spawned);
        }

        if outcome.caught_player && !world.is_over() {
            world.phase = GamePhase::GameOver;
            log::info!(
                "Player caught at ({:.1}, {:.1}) after {} ticks",
                world.player_position.x,
                world.player_position.y,
                world.time_ticks
            );
        }
    }

    registry.compact();
}
