//! Entity-Component-System runtime
//!
//! Sparse-set component stores owned by a per-scene [`Registry`], and the
//! fixed pipeline of per-frame systems that operate on them.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod registry;
pub mod scheduler;
pub mod sparse_set;
pub mod systems;

#[cfg(test)]
mod tests;

pub use component::{Component, ComponentKind};
pub use entity::Entity;
pub use error::{EcsError, EcsResult};
pub use registry::Registry;
pub use scheduler::{FrameContext, FrameSchedule, SystemPhase};
pub use sparse_set::SparseSet;
