//! Camera Module
//!
//! First-person view state: mouse-look orientation and the eye-height
//! viewpoint. This module is window-system agnostic - it only deals with
//! orientation and position math.

pub mod look_controller;
pub mod viewpoint;

pub use look_controller::LookController;
pub use viewpoint::{EYE_HEIGHT, Viewpoint};
