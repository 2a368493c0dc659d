//! ECS Components module
//!
//! Plain data attached to entities. Every component carries the id of its
//! owning entity, stamped when it is added to the registry.

pub mod collider;
pub mod combat;
pub mod motion;
pub mod particle;
pub mod render;
pub mod ui;

pub use collider::ColliderComponent;
pub use combat::{DamageComponent, HealthComponent, WeaponComponent, WeaponState};
pub use motion::{ForceComponent, PositionComponent, VelocityComponent};
pub use particle::{EmitterComponent, ParticleComponent};
pub use render::{Layer, RenderComponent, Shape, SpriteComponent, TextComponent};
pub use ui::{GameStateComponent, GameStateValue, InputComponent, UiComponent, UiElement};
