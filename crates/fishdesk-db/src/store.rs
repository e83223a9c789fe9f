//! Keyed, insertion-ordered storage for one entity kind.
//!
//! Entries live in a slot vector addressed through an id index, so
//! lookups are O(1) and iteration follows insertion order. Replacing an
//! entry keeps its slot; deleting leaves a hole that is reclaimed once
//! holes outnumber live entries.

use std::collections::HashMap;

use fishdesk_core::models::Entity;
use parking_lot::RwLock;

const COMPACT_MIN_SLOTS: usize = 32;

#[derive(Debug)]
struct Slots<T> {
    entries: Vec<Option<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Entity> Slots<T> {
    fn insert(&mut self, entity: T) -> Option<T> {
        if let Some(&slot) = self.index.get(entity.id()) {
            return self.entries[slot].replace(entity);
        }
        self.index.insert(entity.id().to_string(), self.entries.len());
        self.entries.push(Some(entity));
        None
    }

    fn compact(&mut self) {
        let live = self.index.len();
        if self.entries.len() < COMPACT_MIN_SLOTS || self.entries.len() - live <= live {
            return;
        }
        let entries: Vec<Option<T>> = self.entries.drain(..).filter(Option::is_some).collect();
        self.index = entries
            .iter()
            .enumerate()
            .filter_map(|(slot, e)| e.as_ref().map(|e| (e.id().to_string(), slot)))
            .collect();
        self.entries = entries;
    }
}

/// Thread-safe store for a single entity kind.
///
/// Every method takes the lock for its whole duration, so each call is
/// atomic with respect to the others. Reads hand out clones: neither
/// side observes later changes made by the other.
#[derive(Debug)]
pub struct EntityStore<T> {
    inner: RwLock<Slots<T>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Slots::default()),
        }
    }
}

impl<T: Entity + Clone> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or fully replace the entity at its id. Returns the
    /// replaced value.
    pub fn put(&self, entity: T) -> Option<T> {
        self.inner.write().insert(entity)
    }

    /// Insert many entities under a single lock acquisition.
    pub fn put_all(&self, entities: impl IntoIterator<Item = T>) {
        let mut slots = self.inner.write();
        for entity in entities {
            slots.insert(entity);
        }
    }

    /// Insert only if the id is free. Returns whether it was inserted.
    pub fn insert_if_absent(&self, entity: T) -> bool {
        let mut slots = self.inner.write();
        if slots.index.contains_key(entity.id()) {
            return false;
        }
        slots.insert(entity);
        true
    }

    pub fn get(&self, id: &str) -> Option<T> {
        let slots = self.inner.read();
        let slot = *slots.index.get(id)?;
        slots.entries[slot].clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().index.contains_key(id)
    }

    /// Snapshot of all entities in insertion order.
    pub fn get_all(&self) -> Vec<T> {
        self.inner.read().entries.iter().flatten().cloned().collect()
    }

    /// Snapshot of the entities matching `predicate`, in insertion order.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner
            .read()
            .entries
            .iter()
            .flatten()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }

    /// Whether any entity matches `predicate`.
    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.inner.read().entries.iter().flatten().any(predicate)
    }

    /// Read-modify-write of one entity under the write lock. Returns the
    /// updated entity, or `None` if `id` is absent.
    ///
    /// `f` must not change the entity's id.
    pub fn update(&self, id: &str, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut slots = self.inner.write();
        let slot = *slots.index.get(id)?;
        let entity = slots.entries[slot].as_mut()?;
        f(entity);
        debug_assert_eq!(entity.id(), id, "update must not change the entity id");
        Some(entity.clone())
    }

    /// Remove the entity if present. Returns whether removal occurred.
    pub fn delete(&self, id: &str) -> bool {
        let mut slots = self.inner.write();
        let Some(slot) = slots.index.remove(id) else {
            return false;
        };
        slots.entries[slot] = None;
        slots.compact();
        true
    }

    pub fn len(&self) -> usize {
        self.inner.read().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
