//! Position, velocity and force components

use crate::ecs::Entity;
use crate::foundation::math::Vec2;

/// Where an entity is on screen
#[derive(Debug, Clone, PartialEq)]
pub struct PositionComponent {
    /// Position in pixels
    pub value: Vec2,
    pub(crate) entity: Entity,
}

impl PositionComponent {
    /// Create a position
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vec(Vec2::new(x, y))
    }

    /// Create a position from a vector
    pub fn from_vec(value: Vec2) -> Self {
        Self {
            value,
            entity: Entity::INVALID,
        }
    }
}

/// Displacement applied to the position every frame
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityComponent {
    /// Pixels per frame
    pub value: Vec2,
    pub(crate) entity: Entity,
}

impl VelocityComponent {
    /// Create a velocity
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vec(Vec2::new(x, y))
    }

    /// Create a velocity from a vector
    pub fn from_vec(value: Vec2) -> Self {
        Self {
            value,
            entity: Entity::INVALID,
        }
    }
}

/// Per-frame push accumulated by input.
///
/// With a velocity present it accelerates it (unit mass); without one it
/// nudges the position directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceComponent {
    /// Accumulated push
    pub value: Vec2,
    pub(crate) entity: Entity,
}

impl ForceComponent {
    /// Create a force
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vec(Vec2::new(x, y))
    }

    /// Create a force from a vector
    pub fn from_vec(value: Vec2) -> Self {
        Self {
            value,
            entity: Entity::INVALID,
        }
    }
}
