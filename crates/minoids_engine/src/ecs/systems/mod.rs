//! Per-frame systems
//!
//! Each system is a plain pass over the registry stores it needs. Run them
//! through [`FrameSchedule`](crate::ecs::scheduler::FrameSchedule) to get the
//! frame order right.

pub mod collision;
pub mod input;
pub mod particle;
pub mod position;
pub mod render;
pub mod ui;

pub use collision::{CollisionDetectionSystem, CollisionResolutionSystem};
pub use input::InputSystem;
pub use particle::ParticleSystem;
pub use position::PositionSystem;
pub use render::RenderSystem;
pub use ui::UiSystem;
