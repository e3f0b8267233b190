//! Input Event Channel
//!
//! Discrete input events published by the host window layer and drained by
//! the movement controller once per frame. This replaces any reliance on
//! global window or document state: everything the controller reacts to
//! between frames arrives as an explicit event.
//!
//! # Example
//!
//! ```ignore
//! use walkabout_engine::input::{InputEvent, InputQueue, KeyCode};
//!
//! let mut queue = InputQueue::new();
//!
//! // Window layer, as platform events arrive:
//! queue.push(InputEvent::Key { key: KeyCode::W, pressed: true });
//! queue.push(InputEvent::Wheel { delta: 120.0 });
//!
//! // Frame loop, once per frame:
//! controller.drain_events(&mut queue);
//! ```

use std::collections::VecDeque;

use super::KeyCode;

/// A discrete input event.
///
/// Produced by the host window layer from platform events; consumed in
/// arrival order by [`MovementController::drain_events`].
///
/// [`MovementController::drain_events`]: crate::player::MovementController::drain_events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key changed state.
    Key { key: KeyCode, pressed: bool },
    /// The mouse wheel moved. `delta` is in raw wheel units with the sign
    /// already normalized by the host so that positive means forward.
    Wheel { delta: f32 },
    /// Pointer lock was acquired or released.
    LockChanged { locked: bool },
}

/// FIFO queue of input events.
///
/// Single producer (the window layer), single consumer (the frame loop).
/// Events drain in arrival order so a press/release pair within one frame
/// still latches and unlatches correctly.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    /// Create an empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an event at the back of the queue.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Take the oldest queued event, if any.
    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    /// Drain all queued events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    /// Number of events currently queued.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard all queued events without processing them.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
