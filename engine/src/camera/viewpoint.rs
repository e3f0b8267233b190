//! Viewpoint Module
//!
//! The first-person camera's world position, held at a fixed eye height.
//! Vertical motion is a deliberate simplification: instead of simulated
//! gravity, the vertical coordinate is pinned back to eye level every frame.

use glam::Vec3;

/// Eye height above the ground plane, in world units.
pub const EYE_HEIGHT: f32 = 1.6;

/// The first-person camera's world position.
///
/// Owned by the caller; the movement controller proposes displacements and
/// applies them here once collision resolution has had its say.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    /// World-space position (eye level, not feet)
    pub position: Vec3,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewpoint {
    /// Create a viewpoint at the scene spawn point, a few units back from
    /// the origin at eye height.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, EYE_HEIGHT, 5.0),
        }
    }

    /// Create a viewpoint at the given ground coordinates, at eye height.
    pub fn at(x: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, EYE_HEIGHT, z),
        }
    }

    /// Move the viewpoint by a world-space displacement.
    pub fn translate(&mut self, displacement: Vec3) {
        self.position += displacement;
    }

    /// Pin the vertical coordinate back to eye height.
    ///
    /// Called at the top of every movement update; this is the ground
    /// constraint standing in for real gravity.
    pub fn clamp_eye_height(&mut self) {
        self.position.y = EYE_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spawns_at_eye_height() {
        let viewpoint = Viewpoint::new();
        assert_eq!(viewpoint.position, Vec3::new(0.0, EYE_HEIGHT, 5.0));
    }

    #[test]
    fn test_at_pins_eye_height() {
        let viewpoint = Viewpoint::at(3.0, -7.5);
        assert_eq!(viewpoint.position, Vec3::new(3.0, 1.6, -7.5));
    }

    #[test]
    fn test_translate() {
        let mut viewpoint = Viewpoint::at(0.0, 0.0);
        viewpoint.translate(Vec3::new(1.0, 0.5, -2.0));
        assert_eq!(viewpoint.position, Vec3::new(1.0, 2.1, -2.0));
    }

    #[test]
    fn test_clamp_eye_height() {
        let mut viewpoint = Viewpoint::at(0.0, 0.0);
        viewpoint.translate(Vec3::new(0.0, 3.0, 0.0));
        viewpoint.clamp_eye_height();
        assert_eq!(viewpoint.position.y, EYE_HEIGHT);
    }
}
