//! Input-driven force and weapon firing

use crate::ecs::components::{
    ColliderComponent, ForceComponent, Layer, RenderComponent, Shape, WeaponComponent, WeaponState,
};
use crate::ecs::{EcsResult, Entity, Registry};
use crate::foundation::color::Color;
use crate::foundation::math::{approach_zero, clamp_magnitude, ease_out_cubic, Vec2};
use crate::input::{InputBindings, InputSource, KeyCode};

const BEAM_COLOR: Color = Color::ORANGE;

/// Turns polled keys into push forces and weapon beams
pub struct InputSystem;

impl InputSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Apply one frame of input. `delta_time` is in seconds.
    pub fn update(
        &mut self,
        registry: &mut Registry,
        input: &dyn InputSource,
        bindings: &InputBindings,
        delta_time: f32,
    ) -> EcsResult<()> {
        Self::push(registry, input, bindings)?;
        Self::fire(registry, input, bindings, delta_time)
    }

    /// Held keys add a step of force; released axes drift back to zero
    fn push(
        registry: &mut Registry,
        input: &dyn InputSource,
        bindings: &InputBindings,
    ) -> EcsResult<()> {
        let controlled: Vec<(Entity, f32, f32, f32)> = registry
            .inputs
            .iter_with_entities()
            .map(|(entity, c)| {
                (entity, c.push_force_step, c.push_force_step_half, c.max_push_force)
            })
            .collect();

        for (entity, step, drag, max) in controlled {
            if !registry.has::<ForceComponent>(entity) {
                registry.add(entity, ForceComponent::new(0.0, 0.0))?;
            }
            let force = registry.require_mut::<ForceComponent>(entity)?;

            let x = axis(input, bindings.left, bindings.right);
            let y = axis(input, bindings.up, bindings.down);
            let mut value = force.value;
            value.x = if x == 0.0 { approach_zero(value.x, drag) } else { value.x + x * step };
            value.y = if y == 0.0 { approach_zero(value.y, drag) } else { value.y + y * step };
            force.value = clamp_magnitude(value, max);
        }
        Ok(())
    }

    fn fire(
        registry: &mut Registry,
        input: &dyn InputSource,
        bindings: &InputBindings,
        delta_time: f32,
    ) -> EcsResult<()> {
        let fire_seconds = registry.simulation.weapon_fire_seconds;
        let weapons: Vec<Entity> = registry.weapons.entities().collect();

        for entity in weapons {
            let weapon = registry.require_mut::<WeaponComponent>(entity)?;
            match weapon.state {
                WeaponState::Idle => {
                    if !input.is_key_pressed(bindings.fire) {
                        continue;
                    }
                    weapon.state = WeaponState::Firing;
                    weapon.firing_duration = 0.0;
                    weapon.reach = 0.0;
                    let width = weapon.width;

                    registry.add(entity, ColliderComponent::rectangle(width, 0.0))?;
                    let beam = RenderComponent::new(
                        Layer::Ground,
                        Shape::RectangleSolid,
                        BEAM_COLOR,
                        width,
                        0.0,
                    );
                    registry.add(entity, beam)?;
                    log::debug!("Weapon {entity} firing");
                }
                WeaponState::Firing => {
                    weapon.firing_duration += delta_time;
                    if weapon.firing_duration >= fire_seconds {
                        weapon.state = WeaponState::Idle;
                        weapon.reach = 0.0;
                        registry.remove::<ColliderComponent>(entity);
                        registry.remove::<RenderComponent>(entity);
                        log::debug!("Weapon {entity} idle");
                        continue;
                    }

                    let progress = weapon.firing_duration / fire_seconds;
                    weapon.reach = weapon.max_length * ease_out_cubic(progress);
                    let size = Vec2::new(weapon.width, weapon.reach);

                    if let Some(collider) = registry.get_mut::<ColliderComponent>(entity) {
                        collider.dimensions = size;
                    }
                    if let Some(render) = registry.get_mut::<RenderComponent>(entity) {
                        render.dimensions = size;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// -1, 0 or 1 for a pair of opposing keys
fn axis(input: &dyn InputSource, negative: KeyCode, positive: KeyCode) -> f32 {
    let mut value = 0.0;
    if input.is_key_down(negative) {
        value -= 1.0;
    }
    if input.is_key_down(positive) {
        value += 1.0;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{InputComponent, PositionComponent};
    use crate::input::InputSnapshot;
    use approx::assert_relative_eq;

    fn ship(registry: &mut Registry) -> Entity {
        let entity = registry.create_entity();
        registry.add(entity, PositionComponent::new(0.0, 0.0)).unwrap();
        registry.add(entity, InputComponent::new(0.2, 1.0)).unwrap();
        entity
    }

    fn force(registry: &Registry, entity: Entity) -> Vec2 {
        registry.get::<ForceComponent>(entity).unwrap().value
    }

    #[test]
    fn test_held_key_accumulates_and_clamps() {
        let mut registry = Registry::new();
        let entity = ship(&mut registry);
        let mut input = InputSnapshot::new();
        input.handle_key_input(KeyCode::Right, true);
        let bindings = InputBindings::default();
        let mut system = InputSystem::new();

        system.update(&mut registry, &input, &bindings, 0.016).unwrap();
        assert_relative_eq!(force(&registry, entity).x, 0.2);

        for _ in 0..10 {
            system.update(&mut registry, &input, &bindings, 0.016).unwrap();
        }
        assert_relative_eq!(force(&registry, entity).magnitude(), 1.0);
    }

    #[test]
    fn test_release_drags_back_to_zero() {
        let mut registry = Registry::new();
        let entity = ship(&mut registry);
        let bindings = InputBindings::default();
        let mut system = InputSystem::new();

        let mut input = InputSnapshot::new();
        input.handle_key_input(KeyCode::Up, true);
        system.update(&mut registry, &input, &bindings, 0.016).unwrap();
        system.update(&mut registry, &input, &bindings, 0.016).unwrap();
        assert_relative_eq!(force(&registry, entity).y, -0.4);

        input.handle_key_input(KeyCode::Up, false);
        system.update(&mut registry, &input, &bindings, 0.016).unwrap();
        assert_relative_eq!(force(&registry, entity).y, -0.3);
        for _ in 0..5 {
            system.update(&mut registry, &input, &bindings, 0.016).unwrap();
        }
        assert_eq!(force(&registry, entity).y, 0.0);
    }

    #[test]
    fn test_weapon_fire_cycle() {
        let mut registry = Registry::new();
        let shooter = ship(&mut registry);
        let weapon = registry.create_entity();
        registry.add(weapon, PositionComponent::new(0.0, 0.0)).unwrap();
        registry.add(weapon, WeaponComponent::new(shooter, 60.0, 10.0)).unwrap();

        let bindings = InputBindings::default();
        let mut system = InputSystem::new();
        let mut input = InputSnapshot::new();
        input.handle_key_input(KeyCode::Space, true);
        system.update(&mut registry, &input, &bindings, 0.1).unwrap();

        assert!(registry.get::<WeaponComponent>(weapon).unwrap().is_firing());
        assert!(registry.has::<ColliderComponent>(weapon));
        assert!(registry.has::<RenderComponent>(weapon));

        input.begin_frame();
        system.update(&mut registry, &input, &bindings, 0.25).unwrap();
        let beam = registry.get::<WeaponComponent>(weapon).unwrap();
        assert_relative_eq!(beam.reach, 60.0 * 0.875);
        let collider = registry.get::<ColliderComponent>(weapon).unwrap();
        assert_relative_eq!(collider.dimensions.y, 60.0 * 0.875);

        system.update(&mut registry, &input, &bindings, 0.25).unwrap();
        let beam = registry.get::<WeaponComponent>(weapon).unwrap();
        assert!(!beam.is_firing());
        assert_eq!(beam.reach, 0.0);
        assert!(!registry.has::<ColliderComponent>(weapon));
        assert!(!registry.has::<RenderComponent>(weapon));
    }

    #[test]
    fn test_held_fire_does_not_retrigger() {
        let mut registry = Registry::new();
        let shooter = ship(&mut registry);
        let weapon = registry.create_entity();
        registry.add(weapon, WeaponComponent::new(shooter, 60.0, 10.0)).unwrap();

        let bindings = InputBindings::default();
        let mut system = InputSystem::new();
        let mut input = InputSnapshot::new();
        input.handle_key_input(KeyCode::Space, true);
        system.update(&mut registry, &input, &bindings, 0.5).unwrap();
        input.begin_frame();
        system.update(&mut registry, &input, &bindings, 0.5).unwrap();
        system.update(&mut registry, &input, &bindings, 0.5).unwrap();

        assert!(!registry.get::<WeaponComponent>(weapon).unwrap().is_firing());
    }
}
