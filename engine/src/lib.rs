//! Walkabout Engine Library
//!
//! The first-person movement core of a walking-simulator: damped WASD
//! movement, scroll-wheel dolly, and raycast collision resolution against
//! static scene geometry. The host application owns the window, renderer,
//! and event loop; this crate owns everything between "a key changed state"
//! and "the viewpoint moved".
//!
//! # Modules
//!
//! - [`player`] - The movement controller and its smoothing helpers
//! - [`input`] - Platform-agnostic input events, key state, and pointer lock
//! - [`camera`] - Mouse-look orientation and the eye-height viewpoint
//! - [`physics`] - Ray-AABB collision queries against the scene
//! - [`config`] - JSON-loadable movement tunables
//!
//! # Example
//!
//! ```ignore
//! use walkabout_engine::camera::{LookController, Viewpoint};
//! use walkabout_engine::input::{InputEvent, InputQueue, KeyCode, PointerLockState};
//! use walkabout_engine::physics::CollisionBox;
//! use walkabout_engine::player::MovementController;
//! use glam::Vec3;
//!
//! let mut queue = InputQueue::new();
//! let mut lock = PointerLockState::new();
//! let mut look = LookController::new();
//! let mut controller = MovementController::new();
//! let mut viewpoint = Viewpoint::new();
//!
//! // Scene load: register the walkable geometry
//! controller.set_collision_geometry(vec![CollisionBox::from_center_size(
//!     Vec3::new(0.0, 1.5, -6.0),
//!     Vec3::new(10.0, 3.0, 0.3),
//! )]);
//!
//! // Window layer: translate platform events
//! queue.push(InputEvent::Key { key: KeyCode::W, pressed: true });
//! lock.handle_click(&mut queue);
//!
//! // Frame loop, once per frame:
//! controller.drain_events(&mut queue);
//! let snapshot = controller.input_snapshot();
//! controller.update(dt, &snapshot, look.get_forward(), look.get_right(), &mut viewpoint);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;

// Re-export the types a host touches every frame
pub use camera::{EYE_HEIGHT, LookController, Viewpoint};
pub use config::{ConfigError, MovementConfig};
pub use input::{InputEvent, InputQueue, InputSnapshot, KeyCode, MovementKeys, PointerLockState};
pub use physics::{CollisionBox, CollisionWorld, RayHit};
pub use player::MovementController;
