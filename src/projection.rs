//! Projection of ray samples onto vertical wall strips.
//!
//! Strip height is inversely proportional to ray distance, clamped to the
//! screen height, and every strip is centered on the horizon line. The
//! clamp is what keeps point-blank walls from exploding to absurd heights.

use crate::colors;
use crate::raycaster::RaySample;

/// Scale factor applied to ray distance before inversion. At the default
/// screen height a wall 50 units away exactly fills the screen.
pub const DISTANCE_SCALE: f32 = 0.02;

/// How wall strips are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Every strip gets the flat wall color.
    #[default]
    Flat,
    /// Strips darken linearly with distance toward the render cap.
    DistanceFade,
}

/// A single column's wall slice in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    /// Screen row of the topmost pixel.
    pub top: i32,
    /// Strip height in pixels, at most the screen height.
    pub height: u32,
    /// ARGB color the strip is filled with.
    pub color: u32,
}

/// Maps ray samples to wall strips for a given screen height.
#[derive(Debug, Clone)]
pub struct StripProjection {
    screen_height: u32,
    distance_scale: f32,
    shading: ShadingMode,
    max_distance: f32,
}

impl StripProjection {
    /// Creates a projection for `screen_height` rows.
    ///
    /// `max_distance` must match the caster's cap so distance fade reaches
    /// full black exactly at the render horizon.
    pub fn new(screen_height: u32, max_distance: f32) -> Self {
        Self {
            screen_height,
            distance_scale: DISTANCE_SCALE,
            shading: ShadingMode::default(),
            max_distance,
        }
    }

    /// Returns the screen height in rows.
    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    /// Updates the row count (typically called on window resize).
    pub fn set_screen_height(&mut self, screen_height: u32) {
        self.screen_height = screen_height;
    }

    /// Returns the active shading mode.
    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    /// Switches between flat and distance-faded wall colors.
    pub fn set_shading(&mut self, shading: ShadingMode) {
        self.shading = shading;
    }

    /// Strip height for a hit at `distance`, clamped to the screen.
    pub fn strip_height(&self, distance: f32) -> u32 {
        let screen = self.screen_height as f32;
        (screen / (self.distance_scale * distance)).min(screen) as u32
    }

    /// Projects one sample to a strip, or `None` when the ray missed and
    /// the column shows only background.
    pub fn project(&self, sample: &RaySample) -> Option<Strip> {
        if !sample.hit {
            return None;
        }

        let height = self.strip_height(sample.distance);
        let top = self.screen_height as i32 / 2 - (height / 2) as i32;
        let color = match self.shading {
            ShadingMode::Flat => colors::WALL,
            ShadingMode::DistanceFade => {
                colors::modulate(colors::WALL, 1.0 - sample.distance / self.max_distance)
            }
        };

        Some(Strip { top, height, color })
    }
}
