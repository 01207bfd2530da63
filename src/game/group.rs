//! Sprite groups
//!
//! A `SpriteGroup<T>` owns a set of sprites of one kind and the entity
//! handles that address them. Storage is a sparse array indexed by the
//! entity's slot; a slot is `None` once its sprite has been removed.
//!
//! Removal goes through the allocator, so removing the same entity twice
//! is impossible: the second `despawn` finds a stale handle and returns
//! `None`. Coin collection relies on this.

use super::entity::{Entity, EntityAllocator};

pub struct SpriteGroup<T> {
    allocator: EntityAllocator,
    slots: Vec<Option<T>>,
}

impl<T> SpriteGroup<T> {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            slots: Vec::new(),
        }
    }

    /// Add a sprite, returning its handle.
    pub fn spawn(&mut self, sprite: T) -> Entity {
        let entity = self.allocator.allocate();
        let idx = entity.index() as usize;
        if idx >= self.slots.len() {
            self.slots.resize_with(idx + 1, || None);
        }
        self.slots[idx] = Some(sprite);
        entity
    }

    /// Remove a sprite. Returns `None` if the handle is stale.
    pub fn despawn(&mut self, entity: Entity) -> Option<T> {
        if !self.allocator.free(entity) {
            return None;
        }
        self.slots.get_mut(entity.index() as usize)?.take()
    }

    #[cfg(test)]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        if !self.allocator.is_alive(entity) {
            return None;
        }
        self.slots.get(entity.index() as usize)?.as_ref()
    }

    #[cfg(test)]
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Iterate (handle, sprite) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
        // An occupied slot always holds the live generation
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            let sprite = slot.as_ref()?;
            let entity = self.allocator.current(idx as u32)?;
            Some((entity, sprite))
        })
    }

    /// Iterate live sprites in slot order.
    pub fn sprites(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn sprites_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    pub fn len(&self) -> usize {
        self.allocator.alive_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for SpriteGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}
