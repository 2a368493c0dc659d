//! ECS registry
//!
//! Owns the entity id space and one [`SparseSet`] per component kind for a
//! single scene. Create one when a scene loads and drop it when the scene
//! unloads; there is no process-wide registry.

use super::components::{
    ColliderComponent, DamageComponent, EmitterComponent, ForceComponent, GameStateComponent,
    HealthComponent, InputComponent, ParticleComponent, PositionComponent, RenderComponent,
    SpriteComponent, TextComponent, UiComponent, VelocityComponent, WeaponComponent,
};
use super::sparse_set::ErasedStore;
use super::{Component, ComponentKind, EcsError, EcsResult, Entity, SparseSet};
use crate::config::{EngineConfig, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Entity and component owner for one scene
pub struct Registry {
    capacity: usize,
    next_entity_id: u32,
    entities: Vec<Entity>,
    alive: Vec<bool>,

    pub(crate) positions: SparseSet<PositionComponent>,
    pub(crate) velocities: SparseSet<VelocityComponent>,
    pub(crate) forces: SparseSet<ForceComponent>,
    pub(crate) colliders: SparseSet<ColliderComponent>,
    pub(crate) texts: SparseSet<TextComponent>,
    pub(crate) renders: SparseSet<RenderComponent>,
    pub(crate) sprites: SparseSet<SpriteComponent>,
    pub(crate) widgets: SparseSet<UiComponent>,
    pub(crate) healths: SparseSet<HealthComponent>,
    pub(crate) damages: SparseSet<DamageComponent>,
    pub(crate) state_values: SparseSet<GameStateComponent>,
    pub(crate) weapons: SparseSet<WeaponComponent>,
    pub(crate) inputs: SparseSet<InputComponent>,
    pub(crate) emitters: SparseSet<EmitterComponent>,
    pub(crate) particles: SparseSet<ParticleComponent>,

    /// Render store needs a layer sort before the next draw
    pub(crate) renders_dirty: bool,
    pub(crate) rng: StdRng,
    pub(crate) simulation: SimulationConfig,
}

impl Registry {
    /// Create a registry with the default configuration
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Create a registry sized and seeded from `config`
    pub fn from_config(config: &EngineConfig) -> Self {
        let capacity = config.ecs.capacity;
        let rng = match config.ecs.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::debug!("Creating registry with capacity {capacity}");

        Self {
            capacity,
            next_entity_id: 0,
            entities: Vec::new(),
            alive: Vec::new(),
            positions: SparseSet::with_capacity(capacity),
            velocities: SparseSet::with_capacity(capacity),
            forces: SparseSet::with_capacity(capacity),
            colliders: SparseSet::with_capacity(capacity),
            texts: SparseSet::with_capacity(capacity),
            renders: SparseSet::with_capacity(capacity),
            sprites: SparseSet::with_capacity(capacity),
            widgets: SparseSet::with_capacity(capacity),
            healths: SparseSet::with_capacity(capacity),
            damages: SparseSet::with_capacity(capacity),
            state_values: SparseSet::with_capacity(capacity),
            weapons: SparseSet::with_capacity(capacity),
            inputs: SparseSet::with_capacity(capacity),
            emitters: SparseSet::with_capacity(capacity),
            particles: SparseSet::with_capacity(capacity),
            renders_dirty: false,
            rng,
            simulation: config.simulation.clone(),
        }
    }

    /// Create a new entity. Ids increase monotonically and are never reused.
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::from_raw(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        self.alive.push(true);

        if entity.index() >= self.capacity {
            log::warn!(
                "Entity {entity} is past the store capacity of {}; components cannot be attached",
                self.capacity
            );
        } else {
            log::trace!("Created entity {entity}");
        }
        entity
    }

    /// Delete `entity` and every component it owns.
    ///
    /// Returns `false` (and changes nothing) if it was already gone.
    pub fn delete_entity(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        let mut removed = 0;
        let mut render_removed = false;
        for store in self.stores_mut() {
            if store.remove_entity(entity) {
                removed += 1;
                render_removed |= store.kind() == ComponentKind::Render;
            }
        }
        // Swap-remove breaks layer order
        if render_removed {
            self.renders_dirty = true;
        }

        self.alive[entity.index()] = false;
        self.entities.retain(|&e| e != entity);
        log::trace!("Deleted entity {entity} with {removed} components");
        true
    }

    /// Whether `entity` was created here and not deleted
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(entity.index()).copied().unwrap_or(false)
    }

    /// Live entities in creation order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Exclusive upper bound on entity ids the stores can index
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Attach a component.
    ///
    /// `Ok(false)` if the entity already has one of this kind. Unknown
    /// entities and ids past the capacity are errors.
    pub fn add<T: Component>(&mut self, entity: Entity, component: T) -> EcsResult<bool> {
        if !self.is_alive(entity) {
            log::warn!("Rejected {} for unknown entity {entity}", T::KIND);
            return Err(EcsError::UnknownEntity(entity));
        }

        let added = T::store_mut(self).add(entity, component)?;
        if added && T::KIND == ComponentKind::Render {
            self.renders_dirty = true;
        }
        Ok(added)
    }

    /// Detach a component, returning it. Absent components are a no-op.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        let removed = T::store_mut(self).remove(entity);
        if removed.is_some() && T::KIND == ComponentKind::Render {
            self.renders_dirty = true;
        }
        removed
    }

    /// Component of `entity`, if present
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        T::store(self).get(entity)
    }

    /// Mutable component of `entity`, if present.
    ///
    /// Changing a render layer through this requires
    /// [`mark_render_order_dirty`](Self::mark_render_order_dirty).
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        T::store_mut(self).get_mut(entity)
    }

    /// Component of `entity`, or [`EcsError::MissingComponent`]
    pub fn require<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
        self.get(entity).ok_or(EcsError::MissingComponent {
            entity,
            kind: T::KIND,
        })
    }

    /// Mutable component of `entity`, or [`EcsError::MissingComponent`]
    pub fn require_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
        T::store_mut(self).get_mut(entity).ok_or(EcsError::MissingComponent {
            entity,
            kind: T::KIND,
        })
    }

    /// Whether `entity` has a component of kind `T`
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        T::store(self).contains(entity)
    }

    /// Read-only access to a whole store
    pub fn store<T: Component>(&self) -> &SparseSet<T> {
        T::store(self)
    }

    /// Force a layer sort before the next render pass
    pub fn mark_render_order_dirty(&mut self) {
        self.renders_dirty = true;
    }

    /// Simulation settings this registry was created with
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Component count per kind, for diagnostics
    pub fn component_counts(&self) -> Vec<(ComponentKind, usize)> {
        self.stores()
            .iter()
            .map(|store| (store.kind(), store.count()))
            .collect()
    }

    fn stores(&self) -> [&dyn ErasedStore; ComponentKind::COUNT] {
        [
            &self.positions,
            &self.velocities,
            &self.forces,
            &self.colliders,
            &self.texts,
            &self.renders,
            &self.sprites,
            &self.widgets,
            &self.healths,
            &self.damages,
            &self.state_values,
            &self.weapons,
            &self.inputs,
            &self.emitters,
            &self.particles,
        ]
    }

    fn stores_mut(&mut self) -> [&mut dyn ErasedStore; ComponentKind::COUNT] {
        [
            &mut self.positions,
            &mut self.velocities,
            &mut self.forces,
            &mut self.colliders,
            &mut self.texts,
            &mut self.renders,
            &mut self.sprites,
            &mut self.widgets,
            &mut self.healths,
            &mut self.damages,
            &mut self.state_values,
            &mut self.weapons,
            &mut self.inputs,
            &mut self.emitters,
            &mut self.particles,
        ]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        log::trace!("Dropping registry with {} entities", self.entities.len());
    }
}
