//! Ordered entity storage
//!
//! Removal during an update pass only tags a slot. Indices therefore stay
//! stable until [`EntityRegistry::compact`] drops every tagged slot at the end
//! of the pass, preserving insertion order.

use super::entity::{Entity, EntityKind};
use crate::error::RegistryError;

#[derive(Debug, Clone)]
struct Slot {
    entity: Entity,
    doomed: bool,
}

/// Insertion-ordered, index-addressable entity list
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    slots: Vec<Slot>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append an entity, returning its index
    pub fn push(&mut self, entity: Entity) -> usize {
        self.slots.push(Slot {
            entity,
            doomed: false,
        });
        self.slots.len() - 1
    }

    /// Number of slots, tagged ones included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of entities not tagged for removal
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.doomed).count()
    }

    pub fn is_live(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| !s.doomed)
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index).map(|s| &s.entity)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.slots.get_mut(index).map(|s| &mut s.entity)
    }

    /// Tag an entity for removal at the end of the pass
    ///
    /// Tagging an index twice (or one that does not exist) is reported so the
    /// caller can skip it; the registry is left untouched.
    pub fn mark_for_removal(&mut self, index: usize) -> Result<(), RegistryError> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) if !slot.doomed => {
                slot.doomed = true;
                Ok(())
            }
            _ => Err(RegistryError::InvalidEntityIndex { index, len }),
        }
    }

    /// Drop every tagged entity, keeping the survivors in order.
    /// Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|s| !s.doomed);
        before - self.slots.len()
    }

    /// Live entities with their current indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.doomed)
            .map(|(i, s)| (i, &s.entity))
    }

    /// Live entities of one kind
    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.iter().filter(|(_, e)| e.kind() == kind).count()
    }
}
