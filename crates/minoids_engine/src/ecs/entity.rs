//! Entity implementation

use std::fmt;

/// Entity identifier
///
/// An opaque key: entities carry no data of their own, component stores are
/// indexed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Stamp carried by a component that has not been added to a store yet
    pub const INVALID: Self = Self { id: u32::MAX };

    /// Wrap a raw id. Registries hand out ids themselves; this exists for
    /// standalone stores and tests.
    pub const fn from_raw(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The id as a sparse-array index
    #[inline]
    pub const fn index(&self) -> usize {
        self.id as usize
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}
