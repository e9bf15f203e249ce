//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the map, the player pose, and the per-frame pipeline: march one ray per
//! column, project each hit to a wall strip, and compose the strips into
//! the frame buffer.

use crate::colors;
use crate::map::{TileMap, TILE_SIZE};
use crate::player::{PlayerController, Pose};
use crate::projection::{ShadingMode, StripProjection};
use crate::raycaster::RayCaster;
use crate::renderer::Renderer;
use crate::window::InputState;

/// Where the player stands when the engine starts.
const SPAWN: Pose = Pose::new(160.0, 120.0, 0.0);

/// Minimap cell edge in pixels.
const MINIMAP_CELL: i32 = 8;
/// Minimap offset from the top-left screen corner.
const MINIMAP_MARGIN: i32 = 8;

pub struct Engine {
    renderer: Renderer,
    caster: RayCaster,
    projection: StripProjection,
    controller: PlayerController,
    map: TileMap,
    pose: Pose,
    column_step: u32,
    show_minimap: bool,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Self {
        let caster = RayCaster::new(width);
        let projection = StripProjection::new(height, caster.max_distance());

        Self {
            renderer: Renderer::new(width, height),
            caster,
            projection,
            controller: PlayerController::default(),
            map: TileMap::default_level(),
            pose: SPAWN,
            column_step: 1,
            show_minimap: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    /// Replaces the level. The pose is left alone, so callers spawning into
    /// a new map should reposition the player too.
    pub fn set_map(&mut self, map: TileMap) {
        self.map = map;
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Sets how many columns share one ray. Values below 1 are clamped.
    pub fn set_column_step(&mut self, step: u32) {
        self.column_step = step.max(1);
    }

    pub fn column_step(&self) -> u32 {
        self.column_step
    }

    pub fn set_shading(&mut self, shading: ShadingMode) {
        self.projection.set_shading(shading);
    }

    pub fn shading(&self) -> ShadingMode {
        self.projection.shading()
    }

    pub fn minimap_visible(&self) -> bool {
        self.show_minimap
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.caster.set_screen_width(width);
        self.projection.set_screen_height(height);
    }

    /// Advances the simulation: applies toggles and moves the player.
    ///
    /// `dt` is elapsed time in frame-rate-independent units; at zero the
    /// pose is untouched no matter which keys are held.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        if input.minimap_toggled {
            self.show_minimap = !self.show_minimap;
        }
        self.pose = self.controller.update(&self.pose, input, &self.map, dt);
    }

    /// Render the current frame.
    pub fn render(&mut self) {
        self.renderer.clear(colors::BACKGROUND);

        let width = self.renderer.width();
        let mut column = 0;
        while column < width {
            let sample = self.caster.cast(&self.map, &self.pose, column);
            if let Some(strip) = self.projection.project(&sample) {
                if self.column_step <= 1 {
                    self.renderer.draw_strip(column as i32, &strip);
                } else {
                    // One sampled ray fills the whole column group.
                    self.renderer.draw_rect(
                        column as i32,
                        strip.top,
                        self.column_step as i32,
                        strip.height as i32,
                        strip.color,
                    );
                }
            }
            column += self.column_step;
        }

        if self.show_minimap {
            self.draw_minimap();
        }
    }

    /// Returns the rendered frame as bytes (ARGB8888 format).
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Returns the rendered frame as packed ARGB pixels.
    pub fn pixels(&self) -> &[u32] {
        self.renderer.pixels()
    }

    fn draw_minimap(&mut self) {
        for row in 0..self.map.height() as i32 {
            for col in 0..self.map.width() as i32 {
                let color = if self.map.cell(col as isize, row as isize) != 0 {
                    colors::MINIMAP_WALL
                } else {
                    colors::MINIMAP_FLOOR
                };
                self.renderer.draw_rect(
                    MINIMAP_MARGIN + col * MINIMAP_CELL,
                    MINIMAP_MARGIN + row * MINIMAP_CELL,
                    MINIMAP_CELL,
                    MINIMAP_CELL,
                    color,
                );
            }
        }

        // Player marker, scaled from world units to minimap cells.
        let px = MINIMAP_MARGIN + (self.pose.position.x / TILE_SIZE * MINIMAP_CELL as f32) as i32;
        let py = MINIMAP_MARGIN + (self.pose.position.y / TILE_SIZE * MINIMAP_CELL as f32) as i32;
        self.renderer
            .draw_rect(px - 1, py - 1, 3, 3, colors::MINIMAP_PLAYER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(engine: &Engine, x: u32, y: u32) -> u32 {
        engine.pixels()[(y * engine.width() + x) as usize]
    }

    #[test]
    fn center_column_shows_a_centered_wall_strip() {
        let mut engine = Engine::new(320, 240);
        engine.render();

        // From spawn the center ray travels 400 units to the east border,
        // giving a 30 pixel strip over rows 105..135.
        assert_eq!(pixel(&engine, 160, 120), colors::WALL);
        assert_eq!(pixel(&engine, 160, 104), colors::BACKGROUND);
        assert_eq!(pixel(&engine, 160, 135), colors::BACKGROUND);
    }

    #[test]
    fn minimap_toggle_overlays_and_clears() {
        let mut engine = Engine::new(320, 240);
        let input = InputState {
            minimap_toggled: true,
            ..Default::default()
        };

        engine.update(&input, 0.0);
        assert!(engine.minimap_visible());
        engine.render();
        // Top-left map cell is a wall; the spawn marker sits two cells in.
        assert_eq!(
            pixel(&engine, MINIMAP_MARGIN as u32, MINIMAP_MARGIN as u32),
            colors::MINIMAP_WALL
        );
        assert_eq!(pixel(&engine, 24, 20), colors::MINIMAP_PLAYER);

        engine.update(&input, 0.0);
        assert!(!engine.minimap_visible());
        engine.render();
        assert_eq!(
            pixel(&engine, MINIMAP_MARGIN as u32, MINIMAP_MARGIN as u32),
            colors::BACKGROUND
        );
    }

    #[test]
    fn column_step_reuses_one_ray_across_the_group() {
        let mut engine = Engine::new(320, 240);
        engine.set_shading(ShadingMode::DistanceFade);

        engine.render();
        let left = pixel(&engine, 0, 120);
        let right = pixel(&engine, 319, 120);
        assert_ne!(left, right);

        engine.set_column_step(320);
        engine.render();
        assert_eq!(pixel(&engine, 319, 120), pixel(&engine, 0, 120));
    }

    #[test]
    fn column_step_clamps_to_at_least_one() {
        let mut engine = Engine::new(320, 240);
        engine.set_column_step(0);
        assert_eq!(engine.column_step(), 1);
    }

    #[test]
    fn resize_propagates_to_every_stage() {
        let mut engine = Engine::new(320, 240);
        engine.resize(160, 100);

        assert_eq!(engine.width(), 160);
        assert_eq!(engine.height(), 100);
        engine.render();
        assert_eq!(engine.frame_buffer().len(), 160 * 100 * 4);
    }

    #[test]
    fn zero_elapsed_time_leaves_the_pose_alone() {
        let mut engine = Engine::new(320, 240);
        let before = engine.pose();

        let input = InputState {
            forward: true,
            turn_right: true,
            ..Default::default()
        };
        engine.update(&input, 0.0);

        assert_eq!(engine.pose(), before);
    }
}
