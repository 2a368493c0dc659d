//! Drawable components

use crate::ecs::Entity;
use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use crate::foundation::noise::Noise1D;
use crate::render::TextureId;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Geometric shape tag shared by colliders and renderables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned rectangle (outline when rendered)
    Rectangle,
    /// Circle (filled when rendered)
    Circle,
    /// Line segment from the position by the dimensions
    Line,
    /// Filled rectangle, render only
    RectangleSolid,
    /// Ellipse outline, render only
    Ellipse,
    /// Noisy rock outline, render only
    Meteor,
}

/// Draw-order key. Lower layers are drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Underneath everything
    Sub,
    /// Default play layer
    Ground,
    /// On top
    Sky,
}

/// Primitive drawable bound to the entity's position
#[derive(Debug, Clone, PartialEq)]
pub struct RenderComponent {
    /// Fill or stroke color
    pub color: Color,
    /// Width/height, radius, or radius/noise amplitude depending on the shape
    pub dimensions: Vec2,
    /// What to draw
    pub shape: Shape,
    /// Draw order
    pub layer: Layer,
    /// Per-vertex rim offsets for [`Shape::Meteor`]
    pub noise_values: Vec<f32>,
    pub(crate) entity: Entity,
}

impl RenderComponent {
    /// Rectangle, solid rectangle, line or ellipse with explicit dimensions
    pub fn new(layer: Layer, shape: Shape, color: Color, width: f32, height: f32) -> Self {
        Self {
            color,
            dimensions: Vec2::new(width, height),
            shape,
            layer,
            noise_values: Vec::new(),
            entity: Entity::INVALID,
        }
    }

    /// Filled circle
    pub fn circle(layer: Layer, color: Color, radius: f32) -> Self {
        Self::new(layer, Shape::Circle, color, radius, radius)
    }

    /// Meteor outline: `point_count` rim vertices perturbed by `noise`
    pub fn meteor(
        layer: Layer,
        color: Color,
        radius: f32,
        noise_amplitude: f32,
        point_count: usize,
        noise: &Noise1D,
    ) -> Self {
        Self {
            noise_values: noise.samples(point_count, noise_amplitude),
            ..Self::new(layer, Shape::Meteor, color, radius, noise_amplitude)
        }
    }

    /// Radius for round shapes
    pub fn radius(&self) -> f32 {
        self.dimensions.x
    }

    /// Whether there is anything left to draw.
    ///
    /// Shapes shrink to zero instead of being deleted to animate a despawn.
    pub fn is_visible(&self) -> bool {
        match self.shape {
            Shape::Circle | Shape::Meteor => self.dimensions.x > 0.0,
            Shape::Rectangle | Shape::RectangleSolid | Shape::Ellipse => {
                self.dimensions.x > 0.0 && self.dimensions.y > 0.0
            }
            Shape::Line => self.dimensions.x > 0.0 || self.dimensions.y > 0.0,
        }
    }

    /// Rim vertices of a meteor centered on `center`
    pub fn meteor_outline(&self, center: Vec2) -> Vec<Vec2> {
        let count = self.noise_values.len();
        let radius = self.radius();
        self.noise_values
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                let angle = TAU * i as f32 / count as f32;
                // A shrinking meteor must not turn inside out
                let r = (radius + offset).max(0.0);
                center + Vec2::new(angle.cos(), angle.sin()) * r
            })
            .collect()
    }
}

/// Textured sprite; the texture itself belongs to the platform layer
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Texture handle
    pub texture: TextureId,
    /// Draw order
    pub layer: Layer,
    /// Uniform scale
    pub scale: f32,
    /// Tint, white keeps the texture colors
    pub tint: Color,
    pub(crate) entity: Entity,
}

impl SpriteComponent {
    /// Sprite at scale 1
    pub fn new(layer: Layer, texture: TextureId) -> Self {
        Self::scaled(layer, texture, 1.0)
    }

    /// Sprite at a custom scale
    pub fn scaled(layer: Layer, texture: TextureId, scale: f32) -> Self {
        Self {
            texture,
            layer,
            scale,
            tint: Color::WHITE,
            entity: Entity::INVALID,
        }
    }
}

/// Text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    /// Label contents
    pub value: String,
    /// Text color
    pub color: Color,
    /// Font size in pixels
    pub font_size: f32,
    pub(crate) entity: Entity,
}

impl TextComponent {
    /// Default font size
    pub const DEFAULT_FONT_SIZE: f32 = 20.0;

    /// Black text at the default size
    pub fn new(value: impl Into<String>) -> Self {
        Self::colored(value, Color::BLACK)
    }

    /// Colored text at the default size
    pub fn colored(value: impl Into<String>, color: Color) -> Self {
        Self {
            value: value.into(),
            color,
            font_size: Self::DEFAULT_FONT_SIZE,
            entity: Entity::INVALID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_layer_order() {
        assert!(Layer::Sub < Layer::Ground);
        assert!(Layer::Ground < Layer::Sky);
    }

    #[test]
    fn test_visibility_by_shape() {
        let mut circle = RenderComponent::circle(Layer::Ground, Color::RED, 4.0);
        assert!(circle.is_visible());
        circle.dimensions.x = 0.0;
        assert!(!circle.is_visible());

        let flat = RenderComponent::new(Layer::Ground, Shape::Rectangle, Color::RED, 10.0, 0.0);
        assert!(!flat.is_visible());

        let vertical = RenderComponent::new(Layer::Ground, Shape::Line, Color::RED, 0.0, 10.0);
        assert!(vertical.is_visible());
    }

    #[test]
    fn test_meteor_outline() {
        let noise = Noise1D::new(5);
        let meteor = RenderComponent::meteor(Layer::Ground, Color::BROWN, 30.0, 4.0, 12, &noise);
        assert_eq!(meteor.noise_values.len(), 12);

        let center = Vec2::new(100.0, 100.0);
        let outline = meteor.meteor_outline(center);
        assert_eq!(outline.len(), 12);
        for (point, offset) in outline.iter().zip(&meteor.noise_values) {
            assert_relative_eq!((point - center).magnitude(), 30.0 + offset, epsilon = 1e-3);
        }
    }
}
