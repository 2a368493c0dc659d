//! Health, damage and weapon components

use crate::ecs::Entity;

/// Hit points, never below zero
#[derive(Debug, Clone, PartialEq)]
pub struct HealthComponent {
    /// Current health
    pub value: f32,
    pub(crate) entity: Entity,
}

impl HealthComponent {
    /// Create a health component
    pub fn new(value: f32) -> Self {
        Self {
            value,
            entity: Entity::INVALID,
        }
    }

    /// Take damage, clamping at zero
    pub fn take_damage(&mut self, damage: f32) {
        self.value = (self.value - damage).max(0.0);
    }

    /// Check if nothing is left
    pub fn is_depleted(&self) -> bool {
        self.value <= 0.0
    }
}

/// Damage dealt to whatever this entity collides with
#[derive(Debug, Clone, PartialEq)]
pub struct DamageComponent {
    /// Damage per hit
    pub value: f32,
    pub(crate) entity: Entity,
}

impl DamageComponent {
    /// Create a damage component
    pub fn new(value: f32) -> Self {
        Self {
            value,
            entity: Entity::INVALID,
        }
    }
}

/// Firing state of a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponState {
    /// Waiting for the fire input
    Idle,
    /// Beam extending
    Firing,
}

/// A beam weapon slaved to its shooter's position.
///
/// While firing, the beam's reach eases out toward `max_length` and the entity
/// carries a rectangle collider and render; both are detached when idle.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponComponent {
    /// Entity the beam is attached to
    pub shooter: Entity,
    /// Full beam length
    pub max_length: f32,
    /// Beam thickness
    pub width: f32,
    /// Current state
    pub state: WeaponState,
    /// Seconds spent in the current firing
    pub firing_duration: f32,
    /// Current beam length
    pub reach: f32,
    pub(crate) entity: Entity,
}

impl WeaponComponent {
    /// Idle weapon for `shooter`
    pub fn new(shooter: Entity, max_length: f32, width: f32) -> Self {
        Self {
            shooter,
            max_length,
            width,
            state: WeaponState::Idle,
            firing_duration: 0.0,
            reach: 0.0,
            entity: Entity::INVALID,
        }
    }

    /// Whether the beam is out
    pub fn is_firing(&self) -> bool {
        self.state == WeaponState::Firing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_floor() {
        let mut health = HealthComponent::new(5.0);
        health.take_damage(2.0);
        assert_eq!(health.value, 3.0);
        health.take_damage(10.0);
        assert_eq!(health.value, 0.0);
        assert!(health.is_depleted());
    }

    #[test]
    fn test_weapon_starts_idle() {
        let weapon = WeaponComponent::new(Entity::from_raw(1), 60.0, 10.0);
        assert!(!weapon.is_firing());
        assert_eq!(weapon.reach, 0.0);
    }
}
