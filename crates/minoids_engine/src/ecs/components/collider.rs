//! Collision components

use super::render::Shape;
use crate::ecs::Entity;
use crate::foundation::math::Vec2;

/// Hitbox of an entity.
///
/// Rectangles are anchored at the position's top-left corner; circles are
/// centered on it. `collided_with` is a one-frame signal: detection sets it,
/// resolution clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderComponent {
    /// Width/height for rectangles, radius in both axes for circles
    pub dimensions: Vec2,
    /// Rectangle or circle
    pub shape: Shape,
    /// The entity hit this frame, if any
    pub collided_with: Option<Entity>,
    pub(crate) entity: Entity,
}

impl ColliderComponent {
    /// Axis-aligned rectangle hitbox
    pub fn rectangle(width: f32, height: f32) -> Self {
        Self {
            dimensions: Vec2::new(width, height),
            shape: Shape::Rectangle,
            collided_with: None,
            entity: Entity::INVALID,
        }
    }

    /// Circle hitbox
    pub fn circle(radius: f32) -> Self {
        Self {
            dimensions: Vec2::new(radius, radius),
            shape: Shape::Circle,
            collided_with: None,
            entity: Entity::INVALID,
        }
    }

    /// Circle radius
    pub fn radius(&self) -> f32 {
        self.dimensions.x
    }
}
