//! Particle emitter and particle components

use super::render::Shape;
use crate::ecs::Entity;
use crate::foundation::math::Vec2;

/// Timed particle spawner
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterComponent {
    /// Frames between emissions
    pub rate: u32,
    /// Lifetime of emitted particles in frames, stored as their health
    pub particle_lifetime: f32,
    /// Shape of emitted particles
    pub particle_shape: Shape,
    /// Initial velocity of emitted particles
    pub particle_velocity: Vec2,
    /// Only active emitters tick
    pub active: bool,
    /// Frames since the last emission
    pub timer: u32,
    pub(crate) entity: Entity,
}

impl EmitterComponent {
    /// Inactive emitter
    pub fn new(
        rate: u32,
        particle_lifetime: f32,
        particle_shape: Shape,
        particle_velocity: Vec2,
    ) -> Self {
        Self {
            rate,
            particle_lifetime,
            particle_shape,
            particle_velocity,
            active: false,
            timer: 0,
            entity: Entity::INVALID,
        }
    }
}

/// Short-lived entity that decays its health every frame
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleComponent {
    /// Emitter that spawned it; `None` for impact debris
    pub emitter: Option<Entity>,
    /// Cleared to despawn early
    pub active: bool,
    pub(crate) entity: Entity,
}

impl ParticleComponent {
    /// Particle spawned by `emitter`
    pub fn new(emitter: Option<Entity>) -> Self {
        Self {
            emitter,
            active: true,
            entity: Entity::INVALID,
        }
    }
}
