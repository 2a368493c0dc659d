//! Motion integration, weapon slaving and screen wrap

use crate::ecs::{Entity, Registry};
use crate::foundation::math::{vec2, Vec2};
use crate::render::ScreenMetrics;

/// Integrates forces and velocities into positions
pub struct PositionSystem;

impl PositionSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Advance every position by one frame and wrap it around the screen
    pub fn update(&mut self, registry: &mut Registry, screen: &ScreenMetrics) {
        Self::integrate(registry);
        Self::slave_weapons(registry);

        let margin = registry.simulation.wrap_margin;
        for position in registry.positions.iter_mut() {
            position.value = wrap(position.value, screen, margin);
        }
    }

    /// Force is a unit-mass acceleration when there is a velocity to carry it,
    /// otherwise a direct nudge.
    fn integrate(registry: &mut Registry) {
        let Registry {
            positions,
            velocities,
            forces,
            ..
        } = registry;

        for (entity, position) in positions.iter_with_entities_mut() {
            if let Some(force) = forces.get(entity) {
                match velocities.get_mut(entity) {
                    Some(velocity) => velocity.value += force.value,
                    None => position.value += force.value,
                }
            } else if let Some(velocity) = velocities.get(entity) {
                position.value += velocity.value;
            }
        }
    }

    /// Free weapons sit centered on top of their shooter, pushed up by their reach
    fn slave_weapons(registry: &mut Registry) {
        let slaved: Vec<(Entity, Vec2)> = registry
            .weapons
            .iter_with_entities()
            .filter(|&(entity, _)| {
                !registry.forces.contains(entity) && !registry.velocities.contains(entity)
            })
            .filter_map(|(entity, weapon)| {
                let shooter = registry.positions.get(weapon.shooter)?.value;
                let shooter_width = registry
                    .renders
                    .get(weapon.shooter)
                    .map_or(0.0, |render| render.dimensions.x);
                let x = shooter.x + shooter_width / 2.0 - weapon.width / 2.0;
                let y = shooter.y - weapon.reach;
                Some((entity, vec2(x, y)))
            })
            .collect();

        for (entity, value) in slaved {
            if let Some(position) = registry.positions.get_mut(entity) {
                position.value = value;
            }
        }
    }
}

impl Default for PositionSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Toroidal wrap: past the margin on one side reappears on the opposite edge
pub fn wrap(mut value: Vec2, screen: &ScreenMetrics, margin: f32) -> Vec2 {
    if value.x < -margin {
        value.x = screen.width;
    } else if value.x > screen.width + margin {
        value.x = 0.0;
    }

    if value.y < -margin {
        value.y = screen.height;
    } else if value.y > screen.height + margin {
        value.y = 0.0;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{
        ForceComponent, Layer, PositionComponent, RenderComponent, Shape, VelocityComponent,
        WeaponComponent,
    };
    use crate::foundation::color::Color;
    use approx::assert_relative_eq;

    fn position_of(registry: &Registry, entity: Entity) -> Vec2 {
        registry.get::<PositionComponent>(entity).unwrap().value
    }

    #[test]
    fn test_velocity_moves_position() {
        let mut registry = Registry::new();
        let entity = registry.create_entity();
        registry.add(entity, PositionComponent::new(10.0, 10.0)).unwrap();
        registry.add(entity, VelocityComponent::new(2.0, -1.0)).unwrap();

        PositionSystem::new().update(&mut registry, &ScreenMetrics::default());

        let position = position_of(&registry, entity);
        assert_relative_eq!(position.x, 12.0);
        assert_relative_eq!(position.y, 9.0);
    }

    #[test]
    fn test_force_accelerates_velocity() {
        let mut registry = Registry::new();
        let entity = registry.create_entity();
        registry.add(entity, PositionComponent::new(10.0, 10.0)).unwrap();
        registry.add(entity, VelocityComponent::new(1.0, 0.0)).unwrap();
        registry.add(entity, ForceComponent::new(0.5, 0.5)).unwrap();

        PositionSystem::new().update(&mut registry, &ScreenMetrics::default());

        let velocity = registry.get::<VelocityComponent>(entity).unwrap().value;
        assert_relative_eq!(velocity.x, 1.5);
        assert_relative_eq!(velocity.y, 0.5);
        // Velocity is carried, not applied, on a forced frame
        assert_relative_eq!(position_of(&registry, entity).x, 10.0);
    }

    #[test]
    fn test_force_without_velocity_nudges_position() {
        let mut registry = Registry::new();
        let entity = registry.create_entity();
        registry.add(entity, PositionComponent::new(10.0, 10.0)).unwrap();
        registry.add(entity, ForceComponent::new(-3.0, 4.0)).unwrap();

        PositionSystem::new().update(&mut registry, &ScreenMetrics::default());

        let position = position_of(&registry, entity);
        assert_relative_eq!(position.x, 7.0);
        assert_relative_eq!(position.y, 14.0);
    }

    #[test]
    fn test_weapon_follows_shooter() {
        let mut registry = Registry::new();
        let ship = registry.create_entity();
        registry.add(ship, PositionComponent::new(100.0, 200.0)).unwrap();
        let hull = RenderComponent::new(Layer::Ground, Shape::Rectangle, Color::BLACK, 40.0, 20.0);
        registry.add(ship, hull).unwrap();

        let weapon = registry.create_entity();
        registry.add(weapon, PositionComponent::new(0.0, 0.0)).unwrap();
        let mut beam = WeaponComponent::new(ship, 60.0, 10.0);
        beam.reach = 25.0;
        registry.add(weapon, beam).unwrap();

        PositionSystem::new().update(&mut registry, &ScreenMetrics::default());

        let position = position_of(&registry, weapon);
        assert_relative_eq!(position.x, 115.0);
        assert_relative_eq!(position.y, 175.0);
    }

    #[test]
    fn test_wrap_edges() {
        let screen = ScreenMetrics::new(800.0, 450.0);
        assert_eq!(wrap(vec2(-31.0, 10.0), &screen, 30.0), vec2(800.0, 10.0));
        assert_eq!(wrap(vec2(831.0, 10.0), &screen, 30.0), vec2(0.0, 10.0));
        assert_eq!(wrap(vec2(10.0, -31.0), &screen, 30.0), vec2(10.0, 450.0));
        assert_eq!(wrap(vec2(10.0, 481.0), &screen, 30.0), vec2(10.0, 0.0));
        // Inside the margin nothing happens
        assert_eq!(wrap(vec2(-30.0, 480.0), &screen, 30.0), vec2(-30.0, 480.0));
    }
}
