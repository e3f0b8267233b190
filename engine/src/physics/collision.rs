//! Collision detection module
//!
//! Provides ray-based collision queries against the static geometry of a
//! walkable scene. Walls, floors, and props are registered as axis-aligned
//! collision boxes; the movement controller probes them with rays to decide
//! how far the viewpoint may travel each frame.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use walkabout_engine::physics::collision::{CollisionBox, CollisionWorld};
//! use glam::Vec3;
//!
//! let mut world = CollisionWorld::new();
//! world.add(CollisionBox::from_center_size(
//!     Vec3::new(0.0, 1.5, -4.0),
//!     Vec3::new(8.0, 3.0, 0.2),
//! ));
//!
//! let origin = Vec3::new(0.0, 1.6, 0.0);
//! if let Some(hit) = world.cast_ray(origin, Vec3::NEG_Z, f32::INFINITY) {
//!     println!("wall at distance {}", hit.distance);
//! }
//! ```

use glam::Vec3;

/// Result of a nearest-hit ray query against the collision world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space position where the ray struck the surface
    pub position: Vec3,
    /// Outward face normal at the hit point (normalized, axis-aligned)
    pub normal: Vec3,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

impl RayHit {
    /// Creates a new RayHit with the given parameters.
    pub fn new(position: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            position,
            normal,
            distance,
        }
    }
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
///   A ray starting inside the box reports the exit face.
/// * `None` - No intersection, or the box is entirely behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Inverse direction for efficient division; near-zero components map to
    // signed huge values so axis-parallel rays still resolve per slab
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    // Entry/exit times against the two YZ planes (x = min.x and x = max.x)
    let t1 = (aabb_min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb_max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    // Narrow by the two XZ planes (y = min.y and y = max.y)
    let t3 = (aabb_min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb_max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    // Narrow by the two XY planes (z = min.z and z = max.z)
    let t5 = (aabb_min.z - ray_origin.z) * inv_dir.z;
    let t6 = (aabb_max.z - ray_origin.z) * inv_dir.z;

    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the box
            Some(t_max)
        }
    } else {
        None
    }
}

/// Computes the surface normal for a point on an AABB surface.
///
/// Determines which face of the AABB the point is on and returns the outward normal.
///
/// # Arguments
///
/// * `point` - Point on the AABB surface
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// Normalized outward normal vector
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = (aabb_max - aabb_min) * 0.5;
    let local = point - center;

    // Normalize to unit cube space
    let normalized = Vec3::new(
        local.x / half_extents.x,
        local.y / half_extents.y,
        local.z / half_extents.z,
    );

    // The face we are closest to has the highest absolute normalized coordinate
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.x && abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

// =============================================================================
// CollisionBox - static axis-aligned collision surface
// =============================================================================

/// A static axis-aligned collision surface.
///
/// Scene geometry (walls, floors, furniture) is approximated by its bounding
/// box for collision purposes. Boxes never move once registered; the set is
/// replaced wholesale when the scene changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    /// Minimum corner in world space
    pub min: Vec3,
    /// Maximum corner in world space
    pub max: Vec3,
}

impl CollisionBox {
    /// Creates a collision box from explicit corner positions.
    ///
    /// The corners are normalized so `min` holds the componentwise minimum
    /// regardless of argument order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a collision box from a center position and full extents.
    ///
    /// # Arguments
    ///
    /// * `center` - World-space center of the box
    /// * `size` - Full width/height/depth along each axis
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns the world-space center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the full extents of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Checks whether a point lies inside the box (faces inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

// =============================================================================
// CollisionWorld - the set of registered collision surfaces
// =============================================================================

/// The set of static collision surfaces the movement controller queries.
///
/// Uses brute-force iteration over all boxes per ray. Walkable scenes carry
/// a few dozen surfaces at most; spatial partitioning is not warranted at
/// that scale.
///
/// An empty world is valid: every query reports "no hit", which disables
/// collision rather than being an error.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    boxes: Vec<CollisionBox>,
}

impl CollisionWorld {
    /// Creates an empty collision world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collision world from an existing set of boxes.
    pub fn from_boxes(boxes: Vec<CollisionBox>) -> Self {
        Self { boxes }
    }

    /// Replaces the registered surface set.
    pub fn set_boxes(&mut self, boxes: Vec<CollisionBox>) {
        self.boxes = boxes;
    }

    /// Adds a single surface to the set.
    pub fn add(&mut self, surface: CollisionBox) {
        self.boxes.push(surface);
    }

    /// Removes all registered surfaces.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Returns the number of registered surfaces.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if no surfaces are registered.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Returns an iterator over the registered surfaces.
    pub fn iter(&self) -> impl Iterator<Item = &CollisionBox> {
        self.boxes.iter()
    }

    /// Casts a ray against all registered surfaces and returns the closest hit.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (should be normalized)
    /// * `max_dist` - Maximum distance to check for intersections
    ///
    /// # Returns
    ///
    /// `Some(RayHit)` for the closest hit within range, or `None` if the ray
    /// misses everything (including the empty-world case)
    pub fn cast_ray(&self, origin: Vec3, direction: Vec3, max_dist: f32) -> Option<RayHit> {
        let mut closest: Option<RayHit> = None;
        let mut closest_dist = max_dist;

        for surface in &self.boxes {
            if let Some(t) = ray_aabb_intersect(origin, direction, surface.min, surface.max) {
                if t >= 0.0 && t < closest_dist {
                    let hit_position = origin + direction * t;
                    let normal = aabb_surface_normal(hit_position, surface.min, surface.max);

                    closest = Some(RayHit {
                        position: hit_position,
                        normal,
                        distance: t,
                    });
                    closest_dist = t;
                }
            }
        }

        closest
    }

    /// Checks if a ray intersects any surface within range.
    ///
    /// Faster than `cast_ray` when only the yes/no answer is needed.
    pub fn ray_test(&self, origin: Vec3, direction: Vec3, max_dist: f32) -> bool {
        for surface in &self.boxes {
            if let Some(t) = ray_aabb_intersect(origin, direction, surface.min, surface.max) {
                if t >= 0.0 && t < max_dist {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_from_front() {
        let origin = Vec3::new(0.0, 0.0, -5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let result = ray_aabb_intersect(origin, dir, aabb_min, aabb_max);
        assert!(result.is_some());
        let t = result.unwrap();
        assert!((t - 4.0).abs() < 0.001, "Expected t=4.0, got t={}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let origin = Vec3::new(0.0, 5.0, -5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let result = ray_aabb_intersect(origin, dir, aabb_min, aabb_max);
        assert!(result.is_none());
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let origin = Vec3::new(0.0, 0.0, 0.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let result = ray_aabb_intersect(origin, dir, aabb_min, aabb_max);
        assert!(result.is_some());
        let t = result.unwrap();
        // Should hit the exit face at z=1
        assert!((t - 1.0).abs() < 0.001, "Expected t=1.0, got t={}", t);
    }

    #[test]
    fn test_ray_aabb_behind_origin() {
        let origin = Vec3::new(0.0, 0.0, 5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        // Box is behind the ray origin
        let result = ray_aabb_intersect(origin, dir, aabb_min, aabb_max);
        assert!(result.is_none());
    }

    #[test]
    fn test_surface_normal_x_face() {
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let point = Vec3::new(1.0, 0.0, 0.0);
        let normal = aabb_surface_normal(point, aabb_min, aabb_max);
        assert_eq!(normal, Vec3::X);

        let point = Vec3::new(-1.0, 0.0, 0.0);
        let normal = aabb_surface_normal(point, aabb_min, aabb_max);
        assert_eq!(normal, Vec3::NEG_X);
    }

    #[test]
    fn test_surface_normal_y_face() {
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let point = Vec3::new(0.0, 1.0, 0.0);
        let normal = aabb_surface_normal(point, aabb_min, aabb_max);
        assert_eq!(normal, Vec3::Y);

        let point = Vec3::new(0.0, -1.0, 0.0);
        let normal = aabb_surface_normal(point, aabb_min, aabb_max);
        assert_eq!(normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_collision_box_corner_order() {
        let a = Vec3::new(2.0, 3.0, 4.0);
        let b = Vec3::new(-1.0, 0.0, 1.0);
        let surface = CollisionBox::new(a, b);
        assert_eq!(surface.min, Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(surface.max, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_collision_box_from_center_size() {
        let surface =
            CollisionBox::from_center_size(Vec3::new(0.0, 1.5, -4.0), Vec3::new(8.0, 3.0, 0.2));
        assert_eq!(surface.min, Vec3::new(-4.0, 0.0, -4.1));
        assert_eq!(surface.max, Vec3::new(4.0, 3.0, -3.9));
        assert_eq!(surface.center(), Vec3::new(0.0, 1.5, -4.0));
        assert_eq!(surface.size(), Vec3::new(8.0, 3.0, 0.2));
    }

    #[test]
    fn test_collision_box_contains() {
        let surface = CollisionBox::new(Vec3::ZERO, Vec3::ONE);
        assert!(surface.contains(Vec3::new(0.5, 0.5, 0.5)));
        assert!(surface.contains(Vec3::ZERO)); // faces inclusive
        assert!(!surface.contains(Vec3::new(1.5, 0.5, 0.5)));
    }

    #[test]
    fn test_empty_world_never_hits() {
        let world = CollisionWorld::new();
        assert!(world.is_empty());
        let hit = world.cast_ray(Vec3::ZERO, Vec3::NEG_Z, f32::INFINITY);
        assert!(hit.is_none());
        assert!(!world.ray_test(Vec3::ZERO, Vec3::NEG_Z, 100.0));
    }

    #[test]
    fn test_cast_ray_picks_nearest_surface() {
        let mut world = CollisionWorld::new();
        // Two walls straight ahead; the nearer one must win
        world.add(CollisionBox::from_center_size(
            Vec3::new(0.0, 1.0, -10.0),
            Vec3::new(4.0, 2.0, 0.2),
        ));
        world.add(CollisionBox::from_center_size(
            Vec3::new(0.0, 1.0, -3.0),
            Vec3::new(4.0, 2.0, 0.2),
        ));

        let hit = world
            .cast_ray(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z, f32::INFINITY)
            .expect("ray should hit the near wall");
        assert!(
            (hit.distance - 2.9).abs() < 0.001,
            "distance was {}",
            hit.distance
        );
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_cast_ray_respects_max_distance() {
        let mut world = CollisionWorld::new();
        world.add(CollisionBox::from_center_size(
            Vec3::new(0.0, 1.0, -10.0),
            Vec3::new(4.0, 2.0, 0.2),
        ));

        let hit = world.cast_ray(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z, 5.0);
        assert!(hit.is_none());
        assert!(world.ray_test(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z, 20.0));
    }

    #[test]
    fn test_set_boxes_replaces_geometry() {
        let mut world = CollisionWorld::from_boxes(vec![CollisionBox::new(Vec3::ZERO, Vec3::ONE)]);
        assert_eq!(world.len(), 1);

        world.set_boxes(vec![
            CollisionBox::new(Vec3::ZERO, Vec3::ONE),
            CollisionBox::new(Vec3::ONE, Vec3::splat(2.0)),
        ]);
        assert_eq!(world.len(), 2);

        world.clear();
        assert!(world.is_empty());
    }

    #[test]
    fn test_ray_hit_new() {
        let hit = RayHit::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 5.0);
        assert_eq!(hit.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(hit.normal, Vec3::Y);
        assert_eq!(hit.distance, 5.0);
    }
}
