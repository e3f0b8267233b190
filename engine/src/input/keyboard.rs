//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys.
//! Decoupled from any windowing system via generic key codes.

/// Generic key codes for movement input, independent of windowing system.
///
/// Only the keys the walking simulator binds are represented; anything else
/// maps to [`KeyCode::Unknown`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    ShiftLeft,
    ShiftRight,

    // Arrow keys (alternate movement bindings)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// This struct maintains which movement keys are currently held, allowing
/// smooth continuous movement while keys stay down. Key events arrive through
/// the input event channel and are latched here until the matching release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W / ArrowUp - move forward
    pub forward: bool,
    /// S / ArrowDown - move backward
    pub backward: bool,
    /// A / ArrowLeft - strafe left
    pub left: bool,
    /// D / ArrowRight - strafe right
    pub right: bool,
    /// Shift - sprint
    pub sprint: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.sprint = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Check if sprint key is currently pressed.
    pub fn is_sprinting(&self) -> bool {
        self.sprint
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_movement_keys_forward() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.any_pressed());
        assert_eq!(keys.forward_axis(), 1);
    }

    #[test]
    fn test_arrow_keys_mirror_wasd() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ArrowUp, true);
        assert!(keys.forward);

        keys.handle_key(KeyCode::ArrowUp, false);
        keys.handle_key(KeyCode::ArrowLeft, true);
        assert!(keys.left);
        assert_eq!(keys.right_axis(), -1);
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.right_axis(), 1);
    }

    #[test]
    fn test_sprint_key() {
        let mut keys = MovementKeys::new();
        assert!(!keys.is_sprinting());

        keys.handle_key(KeyCode::ShiftLeft, true);
        assert!(keys.is_sprinting());

        keys.handle_key(KeyCode::ShiftLeft, false);
        assert!(!keys.is_sprinting());
    }

    #[test]
    fn test_sprint_is_not_movement() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::ShiftLeft, true);
        // Sprint alone does not count as movement input
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_non_movement_key() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Escape, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_reset() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::ShiftLeft, true);

        keys.reset();
        assert_eq!(keys, MovementKeys::default());
    }
}
