//! Drawing collaborator contract
//!
//! The engine does not own a graphics context. Systems describe what to draw
//! through [`Canvas`], and the platform layer (or [`RecordingCanvas`] when
//! running headless) decides how.

pub mod recording;

pub use recording::{DrawCommand, RecordingCanvas};

use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to a texture owned by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Current screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    /// Screen width
    pub width: f32,
    /// Screen height
    pub height: f32,
}

impl ScreenMetrics {
    /// Create screen metrics
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the screen
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::new(800.0, 450.0)
    }
}

/// Primitive drawing calls consumed by the render and UI systems.
///
/// Rectangles are anchored at their top-left corner; circles and ellipses at
/// their center.
pub trait Canvas {
    /// Filled rectangle
    fn draw_rectangle(&mut self, position: Vec2, size: Vec2, color: Color);

    /// Rectangle outline
    fn draw_rectangle_outline(&mut self, position: Vec2, size: Vec2, color: Color);

    /// Filled circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Circle outline
    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color);

    /// Ellipse outline
    fn draw_ellipse_outline(&mut self, center: Vec2, radii: Vec2, color: Color);

    /// Filled triangle, vertices in counter-clockwise order
    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);

    /// Line segment
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color);

    /// Text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, font_size: f32, color: Color);

    /// Textured sprite with its top-left corner at `position`
    fn draw_texture(&mut self, texture: TextureId, position: Vec2, scale: f32, tint: Color);
}
