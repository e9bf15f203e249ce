//! Per-column ray casting.
//!
//! One ray is marched per screen column across a uniform angular fan
//! centered on the player's heading. Two deliberate approximations define
//! this renderer's look and are part of its contract:
//!
//! - The fan spreads column angles uniformly rather than projecting
//!   through a flat camera plane.
//! - A ray's distance is its raw unit-step count, not a
//!   perpendicular-plane distance.
//!
//! Together these bow walls toward the screen edges (the classic fisheye
//! curvature).

use crate::map::TileMap;
use crate::math::vec2::Vec2;
use crate::player::Pose;

/// Total angular spread of the column fan, in radians.
pub const FIELD_OF_VIEW: f32 = std::f32::consts::FRAC_PI_3;

/// Distance cap in unit steps; a march that reaches it reports a miss.
pub const MAX_RENDER_DISTANCE: f32 = 640.0;

/// Result of marching a single column's ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySample {
    /// Whether the ray entered a solid cell before the distance cap.
    pub hit: bool,
    /// Unit steps traveled: the step that landed in a wall for a hit, or
    /// the cap for a miss. Never exceeds the caster's `max_distance`.
    pub distance: f32,
}

/// Casts one ray per screen column across the field of view.
///
/// Holds the fan geometry (column count, angular spread, distance cap).
/// Each cast is a pure function of the map and pose, so columns can be
/// evaluated in any order.
#[derive(Debug, Clone)]
pub struct RayCaster {
    screen_width: u32,
    fov: f32,
    max_distance: f32,
}

impl RayCaster {
    /// Creates a caster for `screen_width` columns with the default fan.
    pub fn new(screen_width: u32) -> Self {
        Self::with_fan(screen_width, FIELD_OF_VIEW, MAX_RENDER_DISTANCE)
    }

    /// Creates a caster with an explicit field of view and distance cap.
    pub fn with_fan(screen_width: u32, fov: f32, max_distance: f32) -> Self {
        Self {
            screen_width,
            fov,
            max_distance,
        }
    }

    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Adjusts the column count after a window resize.
    pub fn set_screen_width(&mut self, screen_width: u32) {
        self.screen_width = screen_width;
    }

    /// The ray angle for a column: a uniform fan of `fov` radians centered
    /// on the heading, with column 0 at the left edge.
    pub fn column_angle(&self, heading: f32, column: u32) -> f32 {
        heading - self.fov / 2.0 + self.fov * column as f32 / self.screen_width as f32
    }

    /// Marches one column's ray until it enters a solid cell or reaches
    /// the distance cap.
    ///
    /// The ray advances in unit-length steps from the pose position along
    /// the column angle, testing the map after each step. A hit reports
    /// the number of steps taken; a miss reports the cap with
    /// `hit == false`.
    pub fn cast(&self, map: &TileMap, pose: &Pose, column: u32) -> RaySample {
        let dir = Vec2::from_angle(self.column_angle(pose.heading, column));
        let mut point = pose.position;

        let max_steps = self.max_distance as u32;
        for step in 1..=max_steps {
            point = point + dir;
            if map.is_solid(point.x, point.y) {
                return RaySample {
                    hit: true,
                    distance: step as f32,
                };
            }
        }

        RaySample {
            hit: false,
            distance: self.max_distance,
        }
    }
}
