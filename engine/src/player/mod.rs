//! Player Module
//!
//! The first-person movement core.
//!
//! # Components
//!
//! - [`MovementController`] - Damped WASD movement with scroll dolly and
//!   raycast wall/ground collision resolution
//! - [`approach`] / [`approach_vec3`] - The shared exponential smoothing
//!   used for both velocity and scroll decay

pub mod movement_controller;

pub use movement_controller::{
    MovementController, approach, approach_vec3, damping_factor,
    BASE_SPEED, CAPSULE_RADIUS, GROUND_CHECK_DISTANCE, SCROLL_DAMPING_RATE, SCROLL_LIMIT,
    SCROLL_SCALE, SPRINT_MULTIPLIER, VELOCITY_DAMPING_RATE,
};
