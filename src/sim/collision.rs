//! Bullet versus survivor hit detection

use glam::Vec2;

use super::geometry::rectangle_contains;
use super::registry::EntityRegistry;

/// Index of the first live survivor whose square contains `probe`
///
/// Scans in registry order, so when squares overlap the earliest-registered
/// survivor takes the hit.
pub fn first_enemy_hit(registry: &EntityRegistry, probe: Vec2) -> Option<usize> {
    registry.iter().find_map(|(index, entity)| {
        entity
            .as_enemy()
            .filter(|enemy| rectangle_contains(&enemy.corners(), probe))
            .map(|_| index)
    })
}
