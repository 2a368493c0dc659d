//! Emitter timers and particle lifetime decay

use crate::ecs::{Entity, Registry};

/// Ticks emitters and ages particles
pub struct ParticleSystem;

impl ParticleSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Advance emitters and particles by one frame.
    ///
    /// Particles lose one point of health per frame and are deleted once
    /// inactive or exhausted.
    pub fn update(&mut self, registry: &mut Registry) {
        for (entity, emitter) in registry.emitters.iter_with_entities_mut() {
            if !emitter.active {
                continue;
            }
            emitter.timer += 1;
            if emitter.timer >= emitter.rate {
                emitter.timer = 0;
                // Emission is not wired up yet; emitters only keep time
                log::trace!("Emitter {entity} reached its rate");
            }
        }

        let mut expired: Vec<Entity> = Vec::new();
        for (entity, particle) in registry.particles.iter_with_entities() {
            let exhausted = match registry.healths.get_mut(entity) {
                Some(health) => {
                    health.take_damage(1.0);
                    health.is_depleted()
                }
                None => false,
            };
            if !particle.active || exhausted {
                expired.push(entity);
            }
        }

        for entity in expired {
            registry.delete_entity(entity);
        }
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{
        EmitterComponent, HealthComponent, ParticleComponent, PositionComponent, Shape,
    };
    use crate::foundation::math::Vec2;

    fn particle(registry: &mut Registry, lifetime: f32) -> Entity {
        let entity = registry.create_entity();
        registry.add(entity, PositionComponent::new(0.0, 0.0)).unwrap();
        registry.add(entity, HealthComponent::new(lifetime)).unwrap();
        registry.add(entity, ParticleComponent::new(None)).unwrap();
        entity
    }

    #[test]
    fn test_particle_lives_for_its_lifetime() {
        let mut registry = Registry::new();
        let entity = particle(&mut registry, 3.0);
        let mut system = ParticleSystem::new();

        system.update(&mut registry);
        system.update(&mut registry);
        assert!(registry.is_alive(entity));
        assert_eq!(registry.get::<HealthComponent>(entity).unwrap().value, 1.0);

        system.update(&mut registry);
        assert!(!registry.is_alive(entity));
        assert!(!registry.has::<PositionComponent>(entity));
    }

    #[test]
    fn test_inactive_particle_is_deleted() {
        let mut registry = Registry::new();
        let keep = particle(&mut registry, 10.0);
        let gone = particle(&mut registry, 10.0);
        registry.get_mut::<ParticleComponent>(gone).unwrap().active = false;

        ParticleSystem::new().update(&mut registry);

        assert!(registry.is_alive(keep));
        assert!(!registry.is_alive(gone));
        assert!(registry.store::<ParticleComponent>().is_consistent());
    }

    #[test]
    fn test_active_emitter_timer_wraps_at_rate() {
        let mut registry = Registry::new();
        let entity = registry.create_entity();
        let mut emitter = EmitterComponent::new(3, 20.0, Shape::Circle, Vec2::new(0.0, -1.0));
        emitter.active = true;
        registry.add(entity, emitter).unwrap();
        let idle = registry.create_entity();
        registry
            .add(idle, EmitterComponent::new(3, 20.0, Shape::Circle, Vec2::zeros()))
            .unwrap();

        let mut system = ParticleSystem::new();
        system.update(&mut registry);
        system.update(&mut registry);
        assert_eq!(registry.get::<EmitterComponent>(entity).unwrap().timer, 2);
        system.update(&mut registry);
        assert_eq!(registry.get::<EmitterComponent>(entity).unwrap().timer, 0);
        assert_eq!(registry.get::<EmitterComponent>(idle).unwrap().timer, 0);
    }
}
