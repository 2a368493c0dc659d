//! ECS error types

use super::{ComponentKind, Entity};
use thiserror::Error;

/// Errors reported by component stores and the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    /// The entity id does not fit the pre-sized sparse array
    #[error("entity {entity} is outside the store capacity of {capacity}")]
    CapacityExceeded {
        /// Offending entity
        entity: Entity,
        /// Store capacity (exclusive upper bound on ids)
        capacity: usize,
    },

    /// The entity was never created by this registry, or has been deleted
    #[error("entity {0} does not exist in this registry")]
    UnknownEntity(Entity),

    /// A required component is absent
    #[error("entity {entity} has no {kind} component")]
    MissingComponent {
        /// Queried entity
        entity: Entity,
        /// Component kind that was required
        kind: ComponentKind,
    },
}

/// Result alias for ECS operations
pub type EcsResult<T> = Result<T, EcsError>;
