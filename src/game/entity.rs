//! Entity handles with generational indices
//!
//! Every sprite placed in a [`SpriteGroup`](super::SpriteGroup) is addressed
//! by an `Entity`. When a sprite is removed its slot may be reused, but the
//! generation is bumped first, so a handle to a collected coin can never
//! match whatever sprite takes the slot next.

/// A handle to a sprite in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index (for storage access)
    pub fn index(&self) -> u32 {
        self.index
    }

    #[cfg(test)]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Hands out entity handles and tracks which are still alive.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    /// Current generation of each slot
    generations: Vec<u32>,
    /// Freed slots, reused LIFO
    free_indices: Vec<u32>,
    alive_count: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity, reusing a freed slot if there is one.
    pub fn allocate(&mut self) -> Entity {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped on free
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            Entity::new(index, 0)
        }
    }

    /// Free an entity. Returns false if it was already dead.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        self.generations[entity.index as usize] += 1;
        self.free_indices.push(entity.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.index as usize)
            .map_or(false, |&gen| gen == entity.generation)
    }

    /// Handle for the current generation of `index`. Says nothing about
    /// whether the slot is occupied; the owner tracks that.
    pub fn current(&self, index: u32) -> Option<Entity> {
        let generation = *self.generations.get(index as usize)?;
        Some(Entity::new(index, generation))
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }
}
