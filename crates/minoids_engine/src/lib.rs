//! # Minoids Engine
//!
//! Sparse-set ECS runtime for a 2D arcade game.
//!
//! ## Features
//!
//! - **Sparse-set storage**: O(1) add, lookup and swap-remove per component kind
//! - **Per-scene registry**: one store per component kind, total entity cleanup
//! - **Frame systems**: integration, screen wrap, collision, input, particles, drawing
//! - **Headless collaborators**: recording canvas and polled input snapshot
//!
//! ## Quick Start
//!
//! ```rust
//! use minoids_engine::prelude::*;
//!
//! let mut registry = Registry::new();
//! let rock = registry.create_entity();
//! registry.add(rock, PositionComponent::new(10.0, 10.0))?;
//! registry.add(rock, VelocityComponent::new(1.0, 0.0))?;
//!
//! let input = InputSnapshot::new();
//! let bindings = InputBindings::default();
//! let context = FrameContext {
//!     input: &input,
//!     bindings: &bindings,
//!     screen: ScreenMetrics::default(),
//!     delta_time: 1.0 / 60.0,
//! };
//!
//! let mut schedule = FrameSchedule::new();
//! schedule.update(&mut registry, &context)?;
//!
//! let mut canvas = RecordingCanvas::new();
//! schedule.draw(&mut registry, &mut canvas);
//! assert_eq!(registry.require::<PositionComponent>(rock)?.value.x, 11.0);
//! # Ok::<(), EcsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, EcsConfig, EngineConfig, SimulationConfig},
        ecs::{
            components::{
                ColliderComponent, DamageComponent, EmitterComponent, ForceComponent,
                GameStateComponent, GameStateValue, HealthComponent, InputComponent, Layer,
                ParticleComponent, PositionComponent, RenderComponent, Shape, SpriteComponent,
                TextComponent, UiComponent, UiElement, VelocityComponent, WeaponComponent,
                WeaponState,
            },
            Component, ComponentKind, EcsError, EcsResult, Entity, FrameContext, FrameSchedule,
            Registry,
        },
        foundation::{
            color::Color,
            math::{vec2, Vec2},
            noise::Noise1D,
        },
        input::{InputBindings, InputSnapshot, InputSource, KeyCode, MouseButton},
        render::{Canvas, DrawCommand, RecordingCanvas, ScreenMetrics, TextureId},
    };
}
