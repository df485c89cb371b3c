//! Bounded FIFO between key polling and the tick loop
//!
//! Keys can arrive faster than ticks; each tick takes exactly one queued
//! event. The queue is stack allocated and drops the newest event when full,
//! so a held key can't build an unbounded backlog.

use arrayvec::ArrayVec;

use crate::types::InputEvent;

/// Default number of events buffered between ticks.
pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct EventQueue<const CAP: usize = DEFAULT_QUEUE_CAPACITY> {
    events: ArrayVec<InputEvent, CAP>,
    dropped: u32,
}

impl<const CAP: usize> EventQueue<CAP> {
    pub fn new() -> Self {
        Self {
            events: ArrayVec::new(),
            dropped: 0,
        }
    }

    /// Queue an event; returns false (and counts a drop) when full.
    pub fn push(&mut self, event: InputEvent) -> bool {
        if self.events.try_push(event).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    /// Oldest queued event.
    pub fn pop(&mut self) -> Option<InputEvent> {
        if self.events.is_empty() {
            None
        } else {
            Some(self.events.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.events.is_full()
    }

    /// Events rejected because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
