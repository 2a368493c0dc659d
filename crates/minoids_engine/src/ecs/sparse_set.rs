//! Sparse-set component storage
//!
//! `sparse[entity]` holds either [`EMPTY`] or an index into `dense`, and every
//! live dense slot maps back through `sparse`: `ids[sparse[e]] == e`. Owners
//! live in `ids`, parallel to `dense`, so overwriting a stored value never
//! loses track of who owns it. Removal swaps the last element into the hole and
//! rewrites the moved element's sparse entry, so the mapping holds for every
//! other entity after any removal order.

use super::{Component, ComponentKind, EcsError, EcsResult, Entity};

/// Sparse entry for an entity without this component
pub const EMPTY: usize = usize::MAX;

const INITIAL_DENSE_CAPACITY: usize = 20;

/// Dense/sparse paired storage for one component kind
#[derive(Debug)]
pub struct SparseSet<T: Component> {
    sparse: Vec<usize>,
    ids: Vec<Entity>,
    dense: Vec<T>,
}

impl<T: Component> SparseSet<T> {
    /// Create a store that can index entity ids in `0..capacity`.
    ///
    /// The sparse array is allocated once here and never grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sparse: vec![EMPTY; capacity],
            ids: Vec::with_capacity(INITIAL_DENSE_CAPACITY.min(capacity)),
            dense: Vec::with_capacity(INITIAL_DENSE_CAPACITY.min(capacity)),
        }
    }

    /// Exclusive upper bound on indexable entity ids
    pub fn capacity(&self) -> usize {
        self.sparse.len()
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Whether `entity` has a component in this store
    pub fn contains(&self, entity: Entity) -> bool {
        self.dense_index(entity).is_some()
    }

    /// Attach `value` to `entity`, stamping its owner.
    ///
    /// Returns `Ok(false)` without touching the store when the entity already
    /// has one; an id past the capacity is a [`EcsError::CapacityExceeded`].
    pub fn add(&mut self, entity: Entity, mut value: T) -> EcsResult<bool> {
        if entity.index() >= self.sparse.len() {
            return Err(EcsError::CapacityExceeded {
                entity,
                capacity: self.sparse.len(),
            });
        }
        if self.contains(entity) {
            return Ok(false);
        }

        value.stamp(entity);
        self.sparse[entity.index()] = self.dense.len();
        self.ids.push(entity);
        self.dense.push(value);
        Ok(true)
    }

    /// Component of `entity`, if present
    pub fn get(&self, entity: Entity) -> Option<&T> {
        let index = self.dense_index(entity)?;
        Some(&self.dense[index])
    }

    /// Mutable component of `entity`, if present.
    ///
    /// Replacing the whole value clears its owner stamp until the next sort or
    /// removal restamps it; the store itself keeps the owner in `ids`.
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let index = self.dense_index(entity)?;
        Some(&mut self.dense[index])
    }

    /// Detach and return the component of `entity`. Absent entities are a no-op.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let index = self.dense_index(entity)?;

        let removed = self.dense.swap_remove(index);
        self.ids.swap_remove(index);
        if let Some(&moved) = self.ids.get(index) {
            self.sparse[moved.index()] = index;
            self.dense[index].stamp(moved);
        }
        self.sparse[entity.index()] = EMPTY;

        log::trace!("{} removed from {}, {} left", T::KIND, entity, self.dense.len());
        Some(removed)
    }

    /// Components in dense order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.dense.iter()
    }

    /// Mutable components in dense order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.dense.iter_mut()
    }

    /// Components paired with their owners, in dense order
    pub fn iter_with_entities(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
        self.ids.iter().copied().zip(self.dense.iter())
    }

    /// Mutable components paired with their owners, in dense order
    pub fn iter_with_entities_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> + '_ {
        self.ids.iter().copied().zip(self.dense.iter_mut())
    }

    /// Dense components as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.dense
    }

    /// Owning entities in dense order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.ids.iter().copied()
    }

    /// Stable-sort the dense array and rebuild the sparse mapping.
    ///
    /// Owners travel with their values and every value is restamped. The
    /// rebuild runs from a drop guard, so the mapping is restored even if
    /// `compare` panics midway.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        let ids = std::mem::take(&mut self.ids);
        let dense = std::mem::take(&mut self.dense);
        let mut guard = ResyncGuard {
            pairs: ids.into_iter().zip(dense).collect(),
            set: self,
        };
        guard.pairs.sort_by(|a, b| compare(&a.1, &b.1));
    }

    /// Stable-sort by a key, see [`sort_by`](Self::sort_by)
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Remove every component, keeping the capacity
    pub fn clear(&mut self) {
        self.ids.clear();
        self.dense.clear();
        self.sparse.fill(EMPTY);
    }

    /// Verify the sparse/dense mapping in both directions
    pub fn is_consistent(&self) -> bool {
        let forward = self
            .ids
            .iter()
            .enumerate()
            .all(|(index, owner)| self.sparse.get(owner.index()) == Some(&index));
        let occupied = self.sparse.iter().filter(|&&slot| slot != EMPTY).count();
        forward && self.ids.len() == self.dense.len() && occupied == self.dense.len()
    }

    fn dense_index(&self, entity: Entity) -> Option<usize> {
        let index = *self.sparse.get(entity.index())?;
        (index != EMPTY && self.ids.get(index) == Some(&entity)).then_some(index)
    }
}

struct ResyncGuard<'a, T: Component> {
    set: &'a mut SparseSet<T>,
    pairs: Vec<(Entity, T)>,
}

impl<T: Component> Drop for ResyncGuard<'_, T> {
    fn drop(&mut self) {
        let set = &mut *self.set;
        set.ids.reserve(self.pairs.len());
        set.dense.reserve(self.pairs.len());
        for (owner, mut value) in self.pairs.drain(..) {
            // Owners only enter `ids` through a bounds-checked `add`
            if let Some(slot) = set.sparse.get_mut(owner.index()) {
                *slot = set.dense.len();
                value.stamp(owner);
                set.ids.push(owner);
                set.dense.push(value);
            }
        }
    }
}

/// Type-erased view of a store, used for whole-entity cleanup and stats
pub(crate) trait ErasedStore {
    fn kind(&self) -> ComponentKind;
    fn remove_entity(&mut self, entity: Entity) -> bool;
    fn count(&self) -> usize;
}

impl<T: Component> ErasedStore for SparseSet<T> {
    fn kind(&self) -> ComponentKind {
        T::KIND
    }

    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.remove(entity).is_some()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{HealthComponent, PositionComponent};

    fn e(id: u32) -> Entity {
        Entity::from_raw(id)
    }

    #[test]
    fn test_add_get_stamps_owner() {
        let mut set = SparseSet::with_capacity(8);
        assert_eq!(set.add(e(3), PositionComponent::new(1.0, 2.0)), Ok(true));

        let stored = set.get(e(3)).unwrap();
        assert_eq!(stored.entity(), e(3));
        assert_eq!(stored.value.x, 1.0);
        assert_eq!(stored.value.y, 2.0);
        assert!(set.get(e(2)).is_none());
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut set = SparseSet::with_capacity(8);
        assert_eq!(set.add(e(1), HealthComponent::new(5.0)), Ok(true));
        assert_eq!(set.add(e(1), HealthComponent::new(9.0)), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(e(1)).unwrap().value, 5.0);
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let mut set = SparseSet::with_capacity(4);
        assert_eq!(
            set.add(e(4), HealthComponent::new(1.0)),
            Err(EcsError::CapacityExceeded { entity: e(4), capacity: 4 })
        );
        assert!(!set.contains(e(4)));
        assert!(set.get(e(400)).is_none());
        assert!(set.remove(e(400)).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_then_get_is_empty_and_idempotent() {
        let mut set = SparseSet::with_capacity(8);
        set.add(e(0), HealthComponent::new(1.0)).unwrap();
        set.add(e(1), HealthComponent::new(2.0)).unwrap();

        assert!(set.remove(e(0)).is_some());
        assert!(set.get(e(0)).is_none());
        assert!(set.remove(e(0)).is_none());
        assert!(!set.contains(e(0)));

        assert_eq!(set.get(e(1)).unwrap().value, 2.0);
        assert!(set.is_consistent());
    }

    #[test]
    fn test_swap_remove_rewrites_moved_entry() {
        let mut set = SparseSet::with_capacity(16);
        for id in 0..6 {
            set.add(e(id), HealthComponent::new(id as f32)).unwrap();
        }

        // Removing from the middle moves the last element (5) into slot 1
        set.remove(e(1));
        let moved = set.get(e(5)).unwrap();
        assert_eq!(moved.entity(), e(5));
        assert_eq!(moved.value, 5.0);
        assert_eq!(set.as_slice()[1].entity(), e(5));
        assert!(set.is_consistent());
    }

    #[test]
    fn test_interleaved_removals_keep_mapping() {
        let mut set = SparseSet::with_capacity(64);
        for id in 0..40 {
            set.add(e(id), HealthComponent::new(id as f32)).unwrap();
        }
        for id in [7, 39, 0, 21, 22, 23, 8, 38, 1, 15] {
            set.remove(e(id));
            assert!(set.is_consistent());
        }
        for id in [41, 50, 7] {
            set.add(e(id), HealthComponent::new(id as f32)).unwrap();
        }
        set.remove(e(41));

        for item in set.iter() {
            let owner = item.entity();
            let fetched = set.get(owner).unwrap();
            assert_eq!(fetched.entity(), owner);
            assert_eq!(fetched.value, owner.id() as f32);
        }
        assert_eq!(set.len(), 40 - 10 + 3 - 1);
    }

    #[test]
    fn test_sort_resyncs_sparse() {
        let mut set = SparseSet::with_capacity(8);
        for (id, health) in [(0, 3.0), (1, 1.0), (2, 2.0), (3, 1.0)] {
            set.add(e(id), HealthComponent::new(health)).unwrap();
        }

        set.sort_by(|a, b| a.value.total_cmp(&b.value));

        let order: Vec<u32> = set.entities().map(|owner| owner.id()).collect();
        // Stable: 1 stays ahead of 3
        assert_eq!(order, vec![1, 3, 2, 0]);
        for id in 0..4 {
            assert_eq!(set.get(e(id)).unwrap().entity(), e(id));
        }
        assert!(set.is_consistent());
    }

    #[test]
    fn test_replaced_value_keeps_its_owner() {
        let mut set = SparseSet::with_capacity(8);
        for (id, health) in [(0, 3.0), (1, 2.0), (2, 1.0)] {
            set.add(e(id), HealthComponent::new(health)).unwrap();
        }

        // A fresh value carries no owner stamp
        *set.get_mut(e(0)).unwrap() = HealthComponent::new(0.5);
        assert_eq!(set.get(e(0)).unwrap().value, 0.5);
        assert!(set.is_consistent());

        set.sort_by(|a, b| a.value.total_cmp(&b.value));
        let order: Vec<u32> = set.entities().map(|owner| owner.id()).collect();
        assert_eq!(order, vec![0, 2, 1]);
        assert_eq!(set.get(e(0)).unwrap().entity(), e(0));
        assert!(set.is_consistent());

        assert!(set.remove(e(0)).is_some());
        assert!(!set.contains(e(0)));
        assert_eq!(set.len(), 2);
        assert!(set.is_consistent());
    }

    #[test]
    fn test_remove_restamps_replaced_value_it_moves() {
        let mut set = SparseSet::with_capacity(8);
        set.add(e(4), HealthComponent::new(1.0)).unwrap();
        set.add(e(5), HealthComponent::new(2.0)).unwrap();
        *set.get_mut(e(5)).unwrap() = HealthComponent::new(7.0);

        set.remove(e(4));
        let moved = set.get(e(5)).unwrap();
        assert_eq!(moved.entity(), e(5));
        assert_eq!(moved.value, 7.0);
        assert!(set.is_consistent());
    }

    #[test]
    fn test_clear() {
        let mut set = SparseSet::with_capacity(8);
        set.add(e(2), HealthComponent::new(1.0)).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(e(2)));
        assert_eq!(set.capacity(), 8);
        assert!(set.is_consistent());
    }
}
