//! Player pose and movement.
//!
//! The player is a point with a heading on the map's continuous plane.
//! [`PlayerController::update`] is a pure function: it takes the previous
//! pose, the input snapshot, the map, and the frame's elapsed time, and
//! returns the next pose. Nothing here holds hidden state, which keeps the
//! movement rules testable without a window.
//!
//! # Movement rules
//!
//! - Turning is applied first and is never blocked by walls.
//! - Forward/back and strafe contributions use the updated heading and sum
//!   into a single candidate position. Simultaneous keys stack additively
//!   with no normalization, so diagonal movement is faster than
//!   axis-aligned movement.
//! - Collision is resolved per axis: X against the old Y, then Y against
//!   the resolved X. A blocked axis is dropped on its own while the other
//!   may still slide along the wall.

use std::f32::consts::FRAC_PI_2;

use crate::map::TileMap;
use crate::math::vec2::Vec2;
use crate::window::InputState;

/// Translation speed in world units per time-scale unit.
pub const MOVE_SPEED: f32 = 16.0;
/// Turn speed in radians per time-scale unit.
pub const TURN_SPEED: f32 = 0.2;

/// The player's continuous-space position and facing direction.
///
/// Exactly one pose exists per engine; movement produces a new value each
/// frame and the ray caster reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    /// Facing direction in radians; 0 looks along +x, positive turns
    /// toward +y.
    pub heading: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            heading,
        }
    }
}

/// Tuning for player movement.
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Translation speed in world units per time-scale unit.
    pub move_speed: f32,
    /// Turn speed in radians per time-scale unit.
    pub turn_speed: f32,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
        }
    }
}

impl PlayerController {
    pub fn new(move_speed: f32, turn_speed: f32) -> Self {
        Self {
            move_speed,
            turn_speed,
        }
    }

    /// Advances the pose by one frame of input.
    ///
    /// With `dt == 0` the returned pose equals the input pose.
    pub fn update(&self, pose: &Pose, input: &InputState, map: &TileMap, dt: f32) -> Pose {
        let mut heading = pose.heading;
        if input.turn_left {
            heading -= self.turn_speed * dt;
        }
        if input.turn_right {
            heading += self.turn_speed * dt;
        }

        let step = self.move_speed * dt;
        let mut candidate = pose.position;
        if input.forward {
            candidate = candidate + Vec2::from_angle(heading) * step;
        }
        if input.back {
            candidate = candidate - Vec2::from_angle(heading) * step;
        }
        if input.strafe_left {
            candidate = candidate + Vec2::from_angle(heading - FRAC_PI_2) * step;
        }
        if input.strafe_right {
            candidate = candidate + Vec2::from_angle(heading + FRAC_PI_2) * step;
        }

        // X against the old Y, then Y against the resolved X; the second
        // test must see the X outcome or sliding into a corner could clip
        // through it diagonally.
        let mut position = pose.position;
        if !map.is_solid(candidate.x, pose.position.y) {
            position.x = candidate.x;
        }
        if !map.is_solid(position.x, candidate.y) {
            position.y = candidate.y;
        }

        Pose { position, heading }
    }
}
