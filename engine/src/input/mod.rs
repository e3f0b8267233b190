//! Input Module
//!
//! Platform-agnostic input handling for the walking simulator. The host
//! window layer translates its native events into [`InputEvent`]s and pushes
//! them onto an [`InputQueue`]; the movement controller drains that queue
//! once per frame. Pointer-lock transitions flow through the same channel
//! via [`PointerLockState`], so no component reads global window state.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkabout_engine::input::{InputEvent, InputQueue, KeyCode, PointerLockState};
//!
//! let mut queue = InputQueue::new();
//! let mut lock = PointerLockState::new();
//!
//! // Window layer: publish events as they arrive
//! queue.push(InputEvent::Key { key: KeyCode::W, pressed: true });
//! lock.handle_click(&mut queue);
//!
//! // Frame loop: the controller drains everything at the top of the frame
//! controller.drain_events(&mut queue);
//! ```

pub mod events;
pub mod keyboard;
pub mod pointer_lock;

// Re-export commonly used types at module level
pub use events::{InputEvent, InputQueue};
pub use keyboard::{KeyCode, MovementKeys};
pub use pointer_lock::PointerLockState;

/// Immutable per-frame read of the movement input state.
///
/// Produced once per frame from the latched key flags plus whatever raw
/// wheel motion accumulated since the previous frame, consumed by
/// `MovementController::update`, and not retained afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Move forward
    pub forward: bool,
    /// Move backward
    pub backward: bool,
    /// Strafe left
    pub left: bool,
    /// Strafe right
    pub right: bool,
    /// Sprint modifier
    pub sprint: bool,
    /// Raw wheel delta accumulated during the previous frame (positive =
    /// forward). Zero when wheel events already reached the controller
    /// through the event queue.
    pub scroll_delta: f32,
}

impl InputSnapshot {
    /// Build a snapshot from latched key flags and a frame's wheel delta.
    pub fn from_keys(keys: &MovementKeys, scroll_delta: f32) -> Self {
        Self {
            forward: keys.forward,
            backward: keys.backward,
            left: keys.left,
            right: keys.right,
            sprint: keys.sprint,
            scroll_delta,
        }
    }

    /// Forward/backward input direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Left/right input direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Check if any movement input is active.
    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
