//! Headless canvas that records draw calls

use super::{Canvas, TextureId};
use crate::foundation::color::Color;
use crate::foundation::math::Vec2;

/// A single recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle
    Rectangle {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Rectangle outline
    RectangleOutline {
        position: Vec2,
        size: Vec2,
        color: Color,
    },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Circle outline
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Ellipse outline
    EllipseOutline {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    /// Filled triangle
    Triangle {
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: Color,
    },
    /// Line segment
    Line {
        start: Vec2,
        end: Vec2,
        color: Color,
    },
    /// Text
    Text {
        text: String,
        position: Vec2,
        font_size: f32,
        color: Color,
    },
    /// Textured sprite
    Texture {
        texture: TextureId,
        position: Vec2,
        scale: f32,
        tint: Color,
    },
}

impl DrawCommand {
    /// The anchor point the command was drawn at
    pub fn anchor(&self) -> Vec2 {
        match self {
            Self::Rectangle { position, .. }
            | Self::RectangleOutline { position, .. }
            | Self::Text { position, .. }
            | Self::Texture { position, .. } => *position,
            Self::Circle { center, .. }
            | Self::CircleOutline { center, .. }
            | Self::EllipseOutline { center, .. } => *center,
            Self::Triangle { a, .. } => *a,
            Self::Line { start, .. } => *start,
        }
    }

    /// The color the command was drawn with
    pub fn color(&self) -> Color {
        match self {
            Self::Rectangle { color, .. }
            | Self::RectangleOutline { color, .. }
            | Self::Circle { color, .. }
            | Self::CircleOutline { color, .. }
            | Self::EllipseOutline { color, .. }
            | Self::Triangle { color, .. }
            | Self::Line { color, .. }
            | Self::Text { color, .. } => *color,
            Self::Texture { tint, .. } => *tint,
        }
    }
}

/// Canvas that keeps every call in order instead of rasterizing it
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last [`clear`](Self::clear)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands (start of a frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rectangle(&mut self, position: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rectangle { position, size, color });
    }

    fn draw_rectangle_outline(&mut self, position: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::RectangleOutline { position, size, color });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::CircleOutline { center, radius, color });
    }

    fn draw_ellipse_outline(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.commands.push(DrawCommand::EllipseOutline { center, radii, color });
    }

    fn draw_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.commands.push(DrawCommand::Triangle { a, b, c, color });
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { start, end, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font_size,
            color,
        });
    }

    fn draw_texture(&mut self, texture: TextureId, position: Vec2, scale: f32, tint: Color) {
        self.commands.push(DrawCommand::Texture { texture, position, scale, tint });
    }
}
