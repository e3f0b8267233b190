//! Physics module for the walkabout engine
//!
//! Ray-based collision queries against the static geometry of a walkable
//! scene. There is no dynamics simulation here: the walking simulator treats
//! the ground as a flat eye-height constraint, so the only physics the
//! movement core needs is "how far can a ray travel before it hits
//! something".
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//!
//! # Submodules
//!
//! - [`types`] - The core math type (Vec3) re-exported from glam
//! - [`collision`] - Ray-AABB collision queries and the collision world

pub mod collision;
pub mod types;

// Re-export commonly used types at the physics module level
pub use collision::{
    CollisionBox, CollisionWorld, RayHit, aabb_surface_normal, ray_aabb_intersect,
};
pub use types::Vec3;
