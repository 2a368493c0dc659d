//! Rectangle/circle collision detection and resolution
//!
//! Detection only flags pairs through `ColliderComponent::collided_with`;
//! resolution consumes and clears the flags in the same frame.

use crate::config::ImpactParticleConfig;
use crate::ecs::components::{
    ColliderComponent, HealthComponent, Layer, ParticleComponent, PositionComponent,
    RenderComponent, Shape, VelocityComponent,
};
use crate::ecs::{EcsResult, Entity, Registry};
use crate::foundation::math::{circle_overlaps_rect, rotate, Vec2};
use rand::Rng;

/// Flags overlapping rectangle/circle collider pairs
pub struct CollisionDetectionSystem;

impl CollisionDetectionSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Test every rectangle against every circle.
    ///
    /// A rectangle hits at most one circle per frame: the first overlapping
    /// circle in store order wins and the scan for that rectangle stops.
    /// Circle/circle and rectangle/rectangle pairs are never tested.
    pub fn update(&mut self, registry: &mut Registry) {
        let hits = Self::find_hits(registry);

        for &(rectangle, circle) in &hits {
            log::debug!("Collision between {rectangle} and {circle}");
            if let Some(collider) = registry.colliders.get_mut(rectangle) {
                collider.collided_with = Some(circle);
            }
            if let Some(collider) = registry.colliders.get_mut(circle) {
                collider.collided_with = Some(rectangle);
            }
        }
    }

    fn find_hits(registry: &Registry) -> Vec<(Entity, Entity)> {
        let colliders: Vec<(Entity, &ColliderComponent)> =
            registry.colliders.iter_with_entities().collect();
        let positions = &registry.positions;
        let mut hits = Vec::new();

        let rectangles = colliders.iter().filter(|(_, c)| c.shape == Shape::Rectangle);
        for &(rect_entity, rectangle) in rectangles {
            let Some(rect_origin) = positions.get(rect_entity).map(|p| p.value) else {
                continue;
            };

            let hit = colliders
                .iter()
                .filter(|&&(entity, c)| c.shape == Shape::Circle && entity != rect_entity)
                .find(|&&(entity, circle)| {
                    positions.get(entity).is_some_and(|center| {
                        circle_overlaps_rect(
                            center.value,
                            circle.radius(),
                            rect_origin,
                            rectangle.dimensions,
                        )
                    })
                });

            if let Some(&(circle_entity, _)) = hit {
                hits.push((rect_entity, circle_entity));
            }
        }
        hits
    }
}

impl Default for CollisionDetectionSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies damage for flagged pairs, spawns impact particles and clears flags
pub struct CollisionResolutionSystem;

impl CollisionResolutionSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Resolve every flagged collider.
    ///
    /// Damage is applied only when both sides have health and the other side
    /// has damage. Health never drops below zero. Flags are cleared before
    /// impact particles spawn, so a failed spawn still leaves them clear.
    pub fn update(&mut self, registry: &mut Registry) -> EcsResult<()> {
        let flagged: Vec<(Entity, Entity, Shape)> = registry
            .colliders
            .iter_with_entities()
            .filter_map(|(entity, c)| c.collided_with.map(|other| (entity, other, c.shape)))
            .collect();

        let mut impacts = Vec::new();
        for (entity, other, shape) in flagged {
            let Some(damage) = registry.damages.get(other).map(|d| d.value) else {
                continue;
            };
            if !registry.healths.contains(other) {
                continue;
            }
            let Some(health) = registry.healths.get_mut(entity) else {
                continue;
            };

            let before = health.value;
            health.take_damage(damage);
            if health.value >= before {
                continue;
            }
            log::debug!("{entity} took {damage} damage from {other}, health {}", health.value);

            if shape == Shape::Circle {
                impacts.push(entity);
            }
        }

        for collider in registry.colliders.iter_mut() {
            collider.collided_with = None;
        }

        let mut result = Ok(());
        for source in impacts {
            if let Err(err) = Self::spawn_impact_particle(registry, source) {
                log::warn!("No impact particle for {source}: {err}");
                result = result.and(Err(err));
            }
        }
        result
    }

    /// Short lived particle diverging from the source's motion
    fn spawn_impact_particle(registry: &mut Registry, source: Entity) -> EcsResult<()> {
        let Some(origin) = registry.positions.get(source).map(|p| p.value) else {
            return Ok(());
        };
        let base_velocity = registry
            .velocities
            .get(source)
            .map_or_else(Vec2::zeros, |v| v.value);

        let settings = registry.simulation.impact_particle.clone();
        let spread = settings.spread.abs();
        let jitter = settings.speed_jitter.abs();
        let angle = registry.rng.gen_range(-spread..=spread);
        let speed = 1.0 + registry.rng.gen_range(-jitter..=jitter);
        let velocity = rotate(base_velocity, angle) * speed;

        let particle = registry.create_entity();
        let attached = Self::attach_particle(registry, particle, origin, velocity, &settings);
        if attached.is_err() {
            registry.delete_entity(particle);
        } else {
            log::debug!("Spawned impact particle {particle} from {source}");
        }
        attached
    }

    fn attach_particle(
        registry: &mut Registry,
        particle: Entity,
        origin: Vec2,
        velocity: Vec2,
        settings: &ImpactParticleConfig,
    ) -> EcsResult<()> {
        registry.add(particle, PositionComponent::from_vec(origin))?;
        registry.add(particle, VelocityComponent::from_vec(velocity))?;
        let render = RenderComponent::circle(Layer::Ground, settings.color, settings.radius);
        registry.add(particle, render)?;
        registry.add(particle, HealthComponent::new(settings.lifetime))?;
        registry.add(particle, ParticleComponent::new(None))?;
        Ok(())
    }
}

impl Default for CollisionResolutionSystem {
    fn default() -> Self {
        Self::new()
    }
}
