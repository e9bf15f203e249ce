//! Minimal 2D math for poses and ray directions.

pub mod vec2;
