//! Wave spawning
//!
//! Every period a ring of survivors appears around the player: wave N brings
//! N of them, each at an independently random angle.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Enemy, Entity};
use super::registry::EntityRegistry;
use super::state::WorldState;
use crate::config::{GameConfig, ensure_positive};
use crate::error::ConfigError;

/// Periodic survivor spawner
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    rng: Pcg32,
    period_ms: f64,
    radius: f32,
    /// Real time accumulated toward the next spawn
    elapsed_ms: f64,
}

impl SpawnDirector {
    /// Fails unless the spawn period and radius are positive and finite
    pub fn new(seed: u64, config: &GameConfig) -> Result<Self, ConfigError> {
        ensure_positive("spawn_period_ms", config.spawn_period_ms)?;
        ensure_positive("spawn_radius", config.spawn_radius.into())?;

        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            period_ms: config.spawn_period_ms,
            radius: config.spawn_radius,
            elapsed_ms: 0.0,
        })
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Append this wave's survivors, then grow the next wave by one.
    /// Returns how many were spawned.
    pub fn spawn_wave(
        &mut self,
        world: &mut WorldState,
        registry: &mut EntityRegistry,
        config: &GameConfig,
    ) -> u32 {
        if world.is_over() {
            return 0;
        }

        let count = world.wave;
        let center = world.player_position;
        for _ in 0..count {
            let angle = self.rng.random_range(0.0..TAU);
            let pos = center + Vec2::from_angle(angle) * self.radius;
            registry.push(Entity::Enemy(Enemy::new(pos, config)));
        }
        world.wave += 1;

        log::info!("Wave {} spawned {} survivors", world.wave - 1, count);
        count
    }

    /// Drive spawning from elapsed real time instead of an interval timer.
    /// Returns how many survivors were spawned.
    pub fn advance(
        &mut self,
        elapsed_ms: f64,
        world: &mut WorldState,
        registry: &mut EntityRegistry,
        config: &GameConfig,
    ) -> u32 {
        self.elapsed_ms += elapsed_ms.max(0.0);

        let mut spawned = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            spawned += self.spawn_wave(world, registry, config);
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;
    use crate::sim::state::GamePhase;

    fn setup() -> (SpawnDirector, WorldState, EntityRegistry, GameConfig) {
        let config = GameConfig::default();
        let director = SpawnDirector::new(7, &config).unwrap();
        let world = WorldState::new(Vec2::new(320.0, 180.0), 1);
        (director, world, EntityRegistry::new(), config)
    }

    #[test]
    fn test_waves_grow_linearly() {
        let (mut director, mut world, mut registry, config) = setup();

        assert_eq!(director.spawn_wave(&mut world, &mut registry, &config), 1);
        assert_eq!(registry.count_kind(EntityKind::Enemy), 1);
        assert_eq!(world.wave, 2);

        assert_eq!(director.spawn_wave(&mut world, &mut registry, &config), 2);
        assert_eq!(registry.count_kind(EntityKind::Enemy), 3);
        assert_eq!(world.wave, 3);
    }

    #[test]
    fn test_spawn_on_ring_around_player() {
        let (mut director, mut world, mut registry, config) = setup();
        world.wave = 20;
        director.spawn_wave(&mut world, &mut registry, &config);

        for (_, entity) in registry.iter() {
            let pos = entity.position().unwrap();
            let distance = pos.distance(Vec2::new(320.0, 180.0));
            assert!((distance - 700.0).abs() < 0.01, "distance {}", distance);
        }
        // Independent angles, so not all in one spot
        let first = registry.get(0).and_then(|e| e.position());
        assert!(registry.iter().any(|(_, e)| e.position() != first));
    }

    #[test]
    fn test_same_seed_same_ring() {
        let (mut a, mut world_a, mut registry_a, config) = setup();
        let (mut b, mut world_b, mut registry_b, _) = setup();
        world_a.wave = 5;
        world_b.wave = 5;
        a.spawn_wave(&mut world_a, &mut registry_a, &config);
        b.spawn_wave(&mut world_b, &mut registry_b, &config);

        let positions =
            |r: &EntityRegistry| r.iter().map(|(_, e)| e.position()).collect::<Vec<_>>();
        assert_eq!(positions(&registry_a), positions(&registry_b));
    }

    #[test]
    fn test_advance_fires_once_per_period() {
        let (mut director, mut world, mut registry, config) = setup();

        assert_eq!(director.advance(2999.0, &mut world, &mut registry, &config), 0);
        assert_eq!(director.advance(1.0, &mut world, &mut registry, &config), 1);
        // Two periods at once: waves 2 and 3
        assert_eq!(director.advance(6000.0, &mut world, &mut registry, &config), 5);
        assert_eq!(world.wave, 4);
    }

    #[test]
    fn test_rejects_bad_period() {
        for period in [0.0, -3000.0, f64::NAN] {
            let config = GameConfig {
                spawn_period_ms: period,
                ..Default::default()
            };
            assert!(
                matches!(
                    SpawnDirector::new(1, &config),
                    Err(ConfigError::OutOfBoundsConfiguration { field: "spawn_period_ms", .. })
                ),
                "period {}",
                period
            );
        }

        let config = GameConfig {
            spawn_radius: 0.0,
            ..Default::default()
        };
        assert!(SpawnDirector::new(1, &config).is_err());
    }

    #[test]
    fn test_no_spawns_after_game_over() {
        let (mut director, mut world, mut registry, config) = setup();
        world.phase = GamePhase::GameOver;
        assert_eq!(director.spawn_wave(&mut world, &mut registry, &config), 0);
        assert!(registry.is_empty());
        assert_eq!(world.wave, 1);
    }
}
