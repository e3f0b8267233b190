//! Mouse-Look Controller Module
//!
//! First-person look orientation: mouse movement directly rotates yaw and
//! pitch with no smoothing, for precise aiming while the pointer is locked.
//! The controller owns orientation only; the viewpoint position is owned by
//! the caller and moved by the movement controller.
//!
//! Key features:
//! - Direct mouse input → rotation (the host applies deltas only while locked)
//! - Configurable sensitivity (default: 0.002 rad/pixel)
//! - Pitch clamped to ±89 degrees to prevent gimbal lock

use glam::Vec3;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// First-person look controller.
///
/// Produces the forward and right unit vectors the movement controller
/// consumes each frame.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = LookController::new();
///
/// // In the input loop, while the pointer is locked:
/// look.apply_mouse_delta(mouse_dx, mouse_dy);
///
/// // Each frame:
/// controller.update(dt, &snapshot, look.get_forward(), look.get_right(), &mut viewpoint);
/// ```
#[derive(Clone, Debug)]
pub struct LookController {
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to pitch limits
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel (default: 0.002)
    pub sensitivity: f32,
    /// Pitch limits (min, max) in radians
    pitch_limits: (f32, f32),
}

impl Default for LookController {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.002,
            pitch_limits: (PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }
}

impl LookController {
    /// Create a new look controller with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a look controller with custom sensitivity.
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Get the current yaw angle in radians.
    #[inline]
    pub fn get_yaw(&self) -> f32 {
        self.yaw
    }

    /// Set the yaw angle directly (in radians).
    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Get the current pitch angle in radians.
    #[inline]
    pub fn get_pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch angle directly (in radians, clamped to limits).
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Get the pitch limits in radians (min, max).
    #[inline]
    pub fn get_pitch_limits(&self) -> (f32, f32) {
        self.pitch_limits
    }

    /// Apply mouse movement delta to rotate the view.
    ///
    /// # Arguments
    /// * `dx` - Mouse movement in X (pixels). Positive = look right (increase yaw)
    /// * `dy` - Mouse movement in Y (pixels). Positive = look down (decrease pitch)
    ///
    /// # Notes
    /// - Standard FPS conventions for both axes
    /// - Pitch is clamped to ±89 degrees to prevent gimbal lock
    /// - No smoothing is applied, response is instantaneous
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;

        // Pitch is positive up, so mouse-down (positive dy) subtracts
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Get the look direction vector.
    ///
    /// Derived from yaw and pitch; normalized.
    ///
    /// # Coordinate System
    /// - +X = right
    /// - +Y = up
    /// - -Z = forward
    ///
    /// When yaw=0 and pitch=0, the view points toward -Z.
    #[inline]
    pub fn get_forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Get the right direction vector.
    ///
    /// Perpendicular to forward, lying in the horizontal plane; normalized.
    #[inline]
    pub fn get_right(&self) -> Vec3 {
        let forward = self.get_forward();
        forward.cross(Vec3::Y).normalize()
    }

    /// Get the up direction vector.
    ///
    /// Perpendicular to both forward and right; normalized.
    #[inline]
    pub fn get_up(&self) -> Vec3 {
        let forward = self.get_forward();
        let right = self.get_right();
        right.cross(forward).normalize()
    }

    /// Reset orientation to default (looking toward -Z).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let look = LookController::new();
        assert_eq!(look.yaw, 0.0);
        assert_eq!(look.pitch, 0.0);
        assert_eq!(look.sensitivity, 0.002);
    }

    #[test]
    fn test_pitch_limits_are_89_degrees() {
        let look = LookController::new();
        let expected_limit = 89.0 * std::f32::consts::PI / 180.0;
        assert!((look.get_pitch_limits().0 - (-expected_limit)).abs() < 0.001);
        assert!((look.get_pitch_limits().1 - expected_limit).abs() < 0.001);
    }

    #[test]
    fn test_apply_mouse_delta_yaw() {
        let mut look = LookController::new();
        look.apply_mouse_delta(100.0, 0.0); // Move mouse right 100 pixels

        // Yaw should increase by 100 * 0.002 = 0.2 radians
        assert!((look.yaw - 0.2).abs() < 0.001);
        assert_eq!(look.pitch, 0.0); // Pitch unchanged
    }

    #[test]
    fn test_apply_mouse_delta_pitch() {
        let mut look = LookController::new();
        look.apply_mouse_delta(0.0, 100.0); // Move mouse down 100 pixels

        // Pitch should decrease by 100 * 0.002 = 0.2 radians (looking down)
        assert!((look.pitch - (-0.2)).abs() < 0.001);
        assert_eq!(look.yaw, 0.0); // Yaw unchanged
    }

    #[test]
    fn test_pitch_clamping() {
        let mut look = LookController::new();
        let limit = 89.0 * std::f32::consts::PI / 180.0;

        // Way up (negative dy = look up)
        look.apply_mouse_delta(0.0, -100000.0);
        assert!((look.pitch - limit).abs() < 0.001);

        // Way down
        look.apply_mouse_delta(0.0, 200000.0);
        assert!((look.pitch - (-limit)).abs() < 0.001);
    }

    #[test]
    fn test_forward_vector_at_origin() {
        let look = LookController::new();
        let forward = look.get_forward();

        // When yaw=0 and pitch=0, should look towards -Z
        assert!(forward.x.abs() < 0.001);
        assert!(forward.y.abs() < 0.001);
        assert!((forward.z - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_direction_vectors_orthonormal() {
        let mut look = LookController::new();
        look.apply_mouse_delta(123.0, 45.0);

        let forward = look.get_forward();
        let right = look.get_right();
        let up = look.get_up();

        assert!((forward.length() - 1.0).abs() < 0.001);
        assert!((right.length() - 1.0).abs() < 0.001);
        assert!((up.length() - 1.0).abs() < 0.001);
        assert!(forward.dot(right).abs() < 0.001);
        assert!(forward.dot(up).abs() < 0.001);
        assert!(right.dot(up).abs() < 0.001);
    }

    #[test]
    fn test_right_stays_horizontal() {
        let mut look = LookController::new();
        look.apply_mouse_delta(300.0, -200.0); // yawed and pitched up

        // Right has no vertical component regardless of pitch
        assert!(look.get_right().y.abs() < 0.001);
    }

    #[test]
    fn test_set_pitch_clamped() {
        let mut look = LookController::new();
        look.set_pitch(10.0); // way past the limit

        let max_pitch = 89.0 * std::f32::consts::PI / 180.0;
        assert!((look.pitch - max_pitch).abs() < 0.001);
    }

    #[test]
    fn test_with_sensitivity() {
        let look = LookController::with_sensitivity(0.005);
        assert_eq!(look.sensitivity, 0.005);
    }

    #[test]
    fn test_reset_orientation() {
        let mut look = LookController::new();
        look.apply_mouse_delta(500.0, 200.0);
        assert!(look.yaw != 0.0);
        assert!(look.pitch != 0.0);

        look.reset_orientation();
        assert_eq!(look.yaw, 0.0);
        assert_eq!(look.pitch, 0.0);
    }
}
