//! Event System
//!
//! Gameplay code doesn't call into audio or anything else directly. It
//! queues events, and the frame driver drains them after the tick:
//!
//! 1. Coin collection finds an overlap → sends CoinCollected
//! 2. Frame driver drains the queue → plays the pickup cue

use super::entity::Entity;

/// A queue for events of a single type.
/// Events are collected during the tick and drained by the frame driver.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A coin was picked up by the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinCollected {
    /// The coin's handle (already despawned)
    pub coin: Entity,
    /// Points awarded
    pub value: u32,
    /// Where the coin was
    pub x: f32,
    pub y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::EntityAllocator;

    #[test]
    fn test_drain_empties_queue() {
        let mut alloc = EntityAllocator::new();
        let mut queue = EventQueue::new();
        queue.send(CoinCollected { coin: alloc.allocate(), value: 10, x: 1.0, y: 2.0 });
        queue.send(CoinCollected { coin: alloc.allocate(), value: 10, x: 3.0, y: 4.0 });
        assert!(!queue.is_empty());

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].x, 1.0);
        assert!(queue.is_empty());
    }
}
