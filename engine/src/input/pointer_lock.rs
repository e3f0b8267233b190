//! Pointer Lock State Module
//!
//! Tracks pointer-lock state for first-person mouse look. The host window
//! layer reports clicks, escape presses, and focus changes here; actual
//! lock transitions are published as [`InputEvent::LockChanged`] events so
//! the movement controller picks them up on its next frame drain, with no
//! shared global state in between.
//!
//! # Usage
//!
//! ```rust,ignore
//! use walkabout_engine::input::{InputQueue, PointerLockState};
//!
//! let mut queue = InputQueue::new();
//! let mut lock = PointerLockState::new();
//!
//! // Click toggles the lock, ESC releases it
//! lock.handle_click(&mut queue);
//! lock.handle_escape(&mut queue);
//!
//! // Window layer applies the resulting cursor state
//! window.set_cursor_visible(lock.should_cursor_be_visible());
//! ```

use super::events::{InputEvent, InputQueue};

/// Tracks pointer-lock state for first-person gameplay.
///
/// While locked, the cursor is hidden and mouse motion drives the look
/// controller. While unlocked, the cursor is visible and mouse look is
/// disabled; movement keys still work either way.
#[derive(Debug, Clone)]
pub struct PointerLockState {
    /// Whether the pointer is currently locked (cursor captured, hidden)
    locked: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if cursor state changed and needs to be applied to the window
    state_dirty: bool,
}

impl Default for PointerLockState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerLockState {
    /// Create a new pointer-lock state, unlocked.
    ///
    /// The walking simulator starts with the cursor free; the player clicks
    /// to lock the pointer and enable mouse look.
    pub fn new() -> Self {
        Self {
            locked: false,
            has_focus: true,
            state_dirty: true, // need to apply initial cursor state
        }
    }

    /// Check if the pointer is currently locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Check if the window has focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    /// Acquire the pointer lock, publishing the transition.
    ///
    /// No-op if already locked.
    pub fn lock(&mut self, queue: &mut InputQueue) {
        if !self.locked {
            self.locked = true;
            self.state_dirty = true;
            queue.push(InputEvent::LockChanged { locked: true });
            log::debug!("pointer locked - mouse look active");
        }
    }

    /// Release the pointer lock, publishing the transition.
    ///
    /// No-op if already unlocked.
    pub fn unlock(&mut self, queue: &mut InputQueue) {
        if self.locked {
            self.locked = false;
            self.state_dirty = true;
            queue.push(InputEvent::LockChanged { locked: false });
            log::debug!("pointer unlocked - mouse look disabled");
        }
    }

    /// Handle a click on the scene: toggle the lock.
    ///
    /// Clicking while unlocked acquires the lock; clicking while locked
    /// releases it.
    pub fn handle_click(&mut self, queue: &mut InputQueue) {
        if self.locked {
            self.unlock(queue);
        } else {
            self.lock(queue);
        }
    }

    /// Handle an ESC press: release the lock if held.
    pub fn handle_escape(&mut self, queue: &mut InputQueue) {
        self.unlock(queue);
    }

    /// Handle window focus gained: restore cursor state.
    pub fn handle_focus_gained(&mut self) {
        self.has_focus = true;
        self.state_dirty = true;
    }

    /// Handle window focus lost.
    ///
    /// The lock preference is kept so it is restored when focus returns.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
        self.state_dirty = true;
    }

    /// Whether the cursor should currently be visible.
    ///
    /// Hidden only while locked with window focus.
    pub fn should_cursor_be_visible(&self) -> bool {
        !(self.locked && self.has_focus)
    }

    /// Whether the cursor should currently be grabbed by the window.
    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.locked && self.has_focus
    }

    /// Human-readable status line for the current lock state.
    pub fn status_message(&self) -> &'static str {
        if self.locked {
            "Pointer locked. Mouse look active, ESC to release."
        } else {
            "Pointer unlocked. Click to lock and enable mouse look."
        }
    }
}
