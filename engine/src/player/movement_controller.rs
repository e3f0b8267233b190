//! First-Person Movement Controller
//!
//! Turns per-frame key input plus a look direction into a damped,
//! collision-resolved displacement of the viewpoint.
//!
//! # Movement Model
//!
//! - Walk speed: 6.0 units/s, sprint multiplier 1.5
//! - Velocity approaches the desired velocity exponentially with damping
//!   rate 10.0, so acceleration is frame-rate independent and direction
//!   reversals never snap
//! - Mouse-wheel input feeds a clamped accumulator that dollies the
//!   viewpoint along the look direction and decays with rate 6.0
//! - There is no simulated gravity: the viewpoint is pinned to eye height
//!   every frame, and wall rays keep it out of geometry
//!
//! # Input
//!
//! Discrete key/wheel/lock events arrive through the [`InputQueue`] and are
//! drained once per frame by [`MovementController::drain_events`]; the frame
//! update itself reads an immutable [`InputSnapshot`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use walkabout_engine::camera::{LookController, Viewpoint};
//! use walkabout_engine::player::MovementController;
//!
//! let mut controller = MovementController::new();
//! let mut viewpoint = Viewpoint::new();
//! let look = LookController::new();
//!
//! // Each frame:
//! controller.drain_events(&mut queue);
//! let snapshot = controller.input_snapshot();
//! controller.update(dt, &snapshot, look.get_forward(), look.get_right(), &mut viewpoint);
//! ```

use glam::Vec3;

use crate::camera::viewpoint::Viewpoint;
use crate::config::MovementConfig;
use crate::input::{InputEvent, InputQueue, InputSnapshot, MovementKeys};
use crate::physics::collision::{CollisionBox, CollisionWorld};

/// Walk speed in units per second
pub const BASE_SPEED: f32 = 6.0;

/// Speed multiplier while sprint is held
pub const SPRINT_MULTIPLIER: f32 = 1.5;

/// Exponential damping rate for velocity smoothing (1/s)
pub const VELOCITY_DAMPING_RATE: f32 = 10.0;

/// Exponential decay rate for the scroll accumulator (1/s)
pub const SCROLL_DAMPING_RATE: f32 = 6.0;

/// Raw wheel units to accumulator units
pub const SCROLL_SCALE: f32 = 0.01;

/// Symmetric clamp bound on the scroll accumulator
pub const SCROLL_LIMIT: f32 = 6.0;

/// Collision radius around the viewpoint
pub const CAPSULE_RADIUS: f32 = 0.3;

/// Maximum downward hit distance that still counts as grounded
pub const GROUND_CHECK_DISTANCE: f32 = 0.1;

/// Displacements shorter than this skip wall resolution entirely, so a
/// near-zero vector is never normalized.
const MIN_DISPLACEMENT: f32 = 1e-3;

/// Scroll accumulator magnitudes below this are treated as settled.
const SCROLL_EPSILON: f32 = 1e-4;

/// Fraction of the damping gap closed after `dt` seconds at `rate`.
///
/// `1 - exp(-rate * dt)`: zero at dt = 0, approaching 1 as dt grows, and
/// composes correctly across frames of any length.
#[inline]
pub fn damping_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Exponentially approach `target` from `current` over `dt` seconds.
///
/// Shared by velocity smoothing and scroll decay so both use identical
/// rounding behavior. This is frame-rate-independent damping, not a
/// physical spring: there is no overshoot and no extra state.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * damping_factor(rate, dt)
}

/// Vector form of [`approach`].
#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, damping_factor(rate, dt))
}

/// Project a look axis onto the horizontal plane and renormalize.
///
/// Keeps look pitch from leaking into movement: walking forward while
/// looking at the floor still moves at full speed along the ground.
/// A vertical axis flattens to zero rather than a garbage direction.
#[inline]
fn project_horizontal(axis: Vec3) -> Vec3 {
    Vec3::new(axis.x, 0.0, axis.z).normalize_or_zero()
}

/// First-person movement controller with smooth acceleration and raycast
/// collision resolution.
///
/// Owns the motion state (velocity + scroll accumulator), the latched
/// movement keys, and the registered collision geometry. The viewpoint it
/// moves is owned by the caller and passed into [`update`] each frame.
///
/// # State machine
///
/// Two input-gating states mirror the pointer lock: `Locked` (mouse look
/// active) and `Unlocked`. Movement input is honored in both; the only
/// transition with side effects is unlocked→locked, which hard-stops
/// velocity and releases every latched key so stale input cannot carry
/// motion into the newly locked session.
///
/// [`update`]: MovementController::update
#[derive(Debug, Clone)]
pub struct MovementController {
    /// Current velocity in world space (units per second)
    velocity: Vec3,

    /// Scroll dolly accumulator, clamped to ±`scroll_limit`
    scroll_accumulator: f32,

    /// Movement keys latched from the event channel
    keys: MovementKeys,

    /// Whether the pointer is currently locked (mouse look active)
    locked: bool,

    /// Registered static collision geometry
    world: CollisionWorld,

    /// Movement tunables
    config: MovementConfig,
}

static_assertions::assert_impl_all!(MovementController: Send, Sync);

impl Default for MovementController {
    fn default() -> Self {
        Self::with_config(MovementConfig::default())
    }
}

impl MovementController {
    /// Create a movement controller with default tunables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a movement controller with custom tunables.
    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            velocity: Vec3::ZERO,
            scroll_accumulator: 0.0,
            keys: MovementKeys::new(),
            locked: false,
            world: CollisionWorld::new(),
            config,
        }
    }

    /// Get the current velocity in world space.
    pub fn get_velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Get the current speed (magnitude of velocity).
    pub fn get_speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Set velocity directly (e.g., for teleports or tests).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Get the current scroll accumulator value.
    pub fn get_scroll_accumulator(&self) -> f32 {
        self.scroll_accumulator
    }

    /// Get the currently latched movement keys.
    pub fn get_keys(&self) -> &MovementKeys {
        &self.keys
    }

    /// Check if the pointer is currently locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Get the movement tunables.
    pub fn get_config(&self) -> &MovementConfig {
        &self.config
    }

    /// Get the registered collision geometry.
    pub fn get_collision_world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Replace the set of collision surfaces.
    ///
    /// An empty set is valid and disables collision entirely.
    pub fn set_collision_geometry(&mut self, surfaces: Vec<CollisionBox>) {
        log::debug!("collision geometry registered: {} surfaces", surfaces.len());
        self.world.set_boxes(surfaces);
    }

    /// Accumulate a raw wheel delta into the scroll dolly.
    ///
    /// Called once per wheel event. `raw_delta` is in wheel units with
    /// positive meaning forward; it is scaled by `scroll_scale` and the
    /// accumulator is clamped to ±`scroll_limit` after every increment.
    pub fn on_scroll(&mut self, raw_delta: f32) {
        self.scroll_accumulator = (self.scroll_accumulator
            + raw_delta * self.config.scroll_scale)
            .clamp(-self.config.scroll_limit, self.config.scroll_limit);
    }

    /// React to a pointer-lock transition.
    ///
    /// Acquiring the lock hard-stops the player: velocity and every latched
    /// key are zeroed immediately (not damped) so motion from before the
    /// player regained mouse look cannot carry over. Releasing the lock has
    /// no side effects; movement keeps running while unlocked.
    pub fn on_lock_state_changed(&mut self, locked: bool) {
        if locked {
            self.velocity = Vec3::ZERO;
            self.keys.reset();
            log::debug!("pointer locked, movement state reset");
        }
        self.locked = locked;
    }

    /// Drain the input event channel, once per frame.
    ///
    /// Key events latch movement flags, wheel events feed [`on_scroll`],
    /// and lock transitions route through [`on_lock_state_changed`]. Events
    /// apply in arrival order.
    ///
    /// [`on_scroll`]: MovementController::on_scroll
    /// [`on_lock_state_changed`]: MovementController::on_lock_state_changed
    pub fn drain_events(&mut self, queue: &mut InputQueue) {
        while let Some(event) = queue.pop() {
            match event {
                InputEvent::Key { key, pressed } => {
                    self.keys.handle_key(key, pressed);
                }
                InputEvent::Wheel { delta } => self.on_scroll(delta),
                InputEvent::LockChanged { locked } => self.on_lock_state_changed(locked),
            }
        }
    }

    /// Take the once-per-frame immutable read of the latched input flags.
    ///
    /// The snapshot's `scroll_delta` is zero because wheel events drained
    /// through the queue already reached the accumulator.
    pub fn input_snapshot(&self) -> InputSnapshot {
        InputSnapshot::from_keys(&self.keys, 0.0)
    }

    /// Advance movement by one frame and move the viewpoint.
    ///
    /// Pipeline:
    /// 1. Pin the viewpoint to eye height (the stand-in for gravity)
    /// 2. Pick walk or sprint speed
    /// 3. Read signed input axes from the snapshot
    /// 4. Flatten the look axes to the horizontal plane
    /// 5. Build the desired world-space velocity
    /// 6. Exponentially approach it (damping rate 10.0)
    /// 7. Resolve the resulting displacement against walls, then apply it
    /// 8. Apply and decay the scroll dolly
    ///
    /// The scroll dolly in step 8 moves the viewpoint directly without wall
    /// resolution, matching long-standing behavior; see
    /// [`resolve_wall_collision`] for the check it skips.
    ///
    /// A snapshot carrying a nonzero `scroll_delta` is folded through the
    /// accumulator first, for hosts that collect wheel input themselves
    /// instead of using the event queue.
    ///
    /// # Arguments
    /// * `dt` - Frame time in seconds
    /// * `input` - The frame's input snapshot
    /// * `forward_axis` - Look direction, unit length (from the look controller)
    /// * `right_axis` - Look-right direction, unit length
    /// * `viewpoint` - The camera position to move
    ///
    /// [`resolve_wall_collision`]: MovementController::resolve_wall_collision
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        forward_axis: Vec3,
        right_axis: Vec3,
        viewpoint: &mut Viewpoint,
    ) {
        let dt = dt.max(0.0);

        if input.scroll_delta != 0.0 {
            self.on_scroll(input.scroll_delta);
        }

        // 1. Ground constraint: no falling, the eye stays at 1.6 units
        viewpoint.clamp_eye_height();

        // 2. Desired speed based on sprint
        let speed = if input.sprint {
            self.config.base_speed * self.config.sprint_multiplier
        } else {
            self.config.base_speed
        };

        // 3. Signed input axes (-1, 0, or 1)
        let forward_input = input.forward_axis() as f32;
        let right_input = input.right_axis() as f32;

        // 4. Flatten look axes so pitch never produces vertical drift
        let forward_flat = project_horizontal(forward_axis);
        let right_flat = project_horizontal(right_axis);

        // 5. Desired velocity in world space (units/sec)
        let desired_velocity =
            forward_flat * (forward_input * speed) + right_flat * (right_input * speed);

        // 6. Smoothly approach the desired velocity
        self.velocity =
            approach_vec3(self.velocity, desired_velocity, self.config.damping_rate, dt);

        // 7. Collision-resolved displacement
        let displacement = self.velocity * dt;
        let adjusted = self.resolve_wall_collision(viewpoint.position, displacement);
        viewpoint.translate(adjusted);

        // 8. Scroll dolly along the look direction, then decay toward zero
        if self.scroll_accumulator.abs() > SCROLL_EPSILON {
            viewpoint.translate(forward_flat * (self.scroll_accumulator * dt));
            self.scroll_accumulator =
                approach(self.scroll_accumulator, 0.0, self.config.scroll_damping_rate, dt);
        }
    }

    /// Resolve a proposed displacement against the registered walls.
    ///
    /// Casts a ray from `origin` along the displacement direction and takes
    /// the nearest hit:
    ///
    /// - no geometry, no hit, or hit at/beyond twice the capsule radius:
    ///   the displacement passes through unchanged
    /// - hit inside the capsule radius: the displacement is zeroed (hard
    ///   block, so thin geometry cannot be tunneled at close range)
    /// - hit between the two: the displacement is scaled by
    ///   `(hit / check) * 0.5`, a deceleration zone that always undershoots
    ///   the wall
    ///
    /// Displacements shorter than 1e-3 pass through untouched.
    pub fn resolve_wall_collision(&self, origin: Vec3, proposed: Vec3) -> Vec3 {
        if self.world.is_empty() {
            return proposed;
        }

        let length = proposed.length();
        if length < MIN_DISPLACEMENT {
            return proposed;
        }

        let direction = proposed / length;
        let check_distance = self.config.capsule_radius * 2.0;

        match self.world.cast_ray(origin, direction, f32::INFINITY) {
            Some(hit) if hit.distance < check_distance => {
                if hit.distance < self.config.capsule_radius {
                    // Very close contact - block entirely
                    log::trace!("wall contact at {:.3}, movement blocked", hit.distance);
                    Vec3::ZERO
                } else {
                    let factor = hit.distance / check_distance;
                    proposed * (factor * 0.5).max(0.0)
                }
            }
            _ => proposed,
        }
    }

    /// Check whether the viewpoint is standing on geometry.
    ///
    /// Casts a ray straight down from `origin`; grounded when the nearest
    /// hit is within `ground_check_distance`, or unconditionally when no
    /// geometry is registered.
    ///
    /// The result does not gate movement today - the eye-height clamp in
    /// [`update`] supersedes it - but the query is kept as a separately
    /// callable capability rather than silently dropped.
    ///
    /// [`update`]: MovementController::update
    pub fn resolve_ground_contact(&self, origin: Vec3) -> bool {
        if self.world.is_empty() {
            return true;
        }

        match self.world.cast_ray(origin, Vec3::NEG_Y, f32::INFINITY) {
            Some(hit) => {
                let grounded = hit.distance <= self.config.ground_check_distance;
                if grounded {
                    log::trace!("ground contact at distance {:.3}", hit.distance);
                }
                grounded
            }
            None => false,
        }
    }
}
