//! Component trait and the closed set of component kinds
//!
//! Every kind is known at compile time and owns exactly one store in the
//! [`Registry`]. `Component` is sealed: the registry cannot grow new kinds at
//! run time, which keeps `add`/`remove`/`get` generic without reflection.

use super::components::{
    ColliderComponent, DamageComponent, EmitterComponent, ForceComponent, GameStateComponent,
    HealthComponent, InputComponent, ParticleComponent, PositionComponent, RenderComponent,
    SpriteComponent, TextComponent, UiComponent, VelocityComponent, WeaponComponent,
};
use super::{Entity, Registry, SparseSet};
use std::fmt;

/// Tag for each component kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// [`PositionComponent`]
    Position,
    /// [`VelocityComponent`]
    Velocity,
    /// [`ForceComponent`]
    Force,
    /// [`ColliderComponent`]
    Collider,
    /// [`TextComponent`]
    Text,
    /// [`RenderComponent`]
    Render,
    /// [`SpriteComponent`]
    Sprite,
    /// [`UiComponent`]
    Ui,
    /// [`HealthComponent`]
    Health,
    /// [`DamageComponent`]
    Damage,
    /// [`GameStateComponent`]
    GameState,
    /// [`WeaponComponent`]
    Weapon,
    /// [`InputComponent`]
    Input,
    /// [`EmitterComponent`]
    Emitter,
    /// [`ParticleComponent`]
    Particle,
}

impl ComponentKind {
    /// Number of component kinds
    pub const COUNT: usize = 15;

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "Position",
            Self::Velocity => "Velocity",
            Self::Force => "Force",
            Self::Collider => "Collider",
            Self::Text => "Text",
            Self::Render => "Render",
            Self::Sprite => "Sprite",
            Self::Ui => "UI",
            Self::Health => "Health",
            Self::Damage => "Damage",
            Self::GameState => "GameState",
            Self::Weapon => "Weapon",
            Self::Input => "Input",
            Self::Emitter => "Emitter",
            Self::Particle => "Particle",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A plain value type stamped with its owning entity.
///
/// Implemented for the fixed set of engine components only.
pub trait Component: sealed::Sealed + Sized + 'static {
    /// Kind tag of this component
    const KIND: ComponentKind;

    /// Owning entity, [`Entity::INVALID`] until the component is added.
    ///
    /// The stamp is a convenience copy; [`SparseSet::entities`] is the record.
    fn entity(&self) -> Entity;

    #[doc(hidden)]
    fn stamp(&mut self, entity: Entity);

    #[doc(hidden)]
    fn store(registry: &Registry) -> &SparseSet<Self>;

    #[doc(hidden)]
    fn store_mut(registry: &mut Registry) -> &mut SparseSet<Self>;
}

macro_rules! impl_component {
    ($($ty:ty => $kind:ident in $store:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Component for $ty {
                const KIND: ComponentKind = ComponentKind::$kind;

                fn entity(&self) -> Entity {
                    self.entity
                }

                fn stamp(&mut self, entity: Entity) {
                    self.entity = entity;
                }

                fn store(registry: &Registry) -> &SparseSet<Self> {
                    &registry.$store
                }

                fn store_mut(registry: &mut Registry) -> &mut SparseSet<Self> {
                    &mut registry.$store
                }
            }
        )*
    };
}

impl_component! {
    PositionComponent => Position in positions,
    VelocityComponent => Velocity in velocities,
    ForceComponent => Force in forces,
    ColliderComponent => Collider in colliders,
    TextComponent => Text in texts,
    RenderComponent => Render in renders,
    SpriteComponent => Sprite in sprites,
    UiComponent => Ui in widgets,
    HealthComponent => Health in healths,
    DamageComponent => Damage in damages,
    GameStateComponent => GameState in state_values,
    WeaponComponent => Weapon in weapons,
    InputComponent => Input in inputs,
    EmitterComponent => Emitter in emitters,
    ParticleComponent => Particle in particles,
}
