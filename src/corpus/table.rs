use super::error::{EntityKind, RecordError};
use std::collections::HashMap;
use std::sync::Arc;

/// An entity addressed by a stable integer identifier.
pub trait Keyed {
    const KIND: EntityKind;

    fn id(&self) -> u32;
}

/// Insert-only table of entities, indexed by their native identifier.
///
/// Entries are stored in insertion order and handed out as shared
/// references, so later passes can point at them without copying.
#[derive(Debug)]
pub struct EntityTable<T> {
    entries: Vec<Arc<T>>,
    index: HashMap<u32, usize>,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> EntityTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity. Identifiers are unique, an existing one is never replaced.
    pub fn insert(&mut self, entity: T) -> Result<Arc<T>, RecordError> {
        let id = entity.id();
        if self.index.contains_key(&id) {
            return Err(RecordError::DuplicateId { kind: T::KIND, id });
        }
        let entity = Arc::new(entity);
        self.index.insert(id, self.entries.len());
        self.entries.push(entity.clone());
        Ok(entity)
    }

    pub fn get(&self, id: u32) -> Option<&Arc<T>> {
        self.index.get(&id).map(|&position| &self.entries[position])
    }

    /// Like [`EntityTable::get`], but a miss is an unresolved reference.
    pub fn resolve(&self, id: u32) -> Result<Arc<T>, RecordError> {
        self.get(id)
            .cloned()
            .ok_or(RecordError::UnresolvedReference { kind: T::KIND, id })
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|entity| entity.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.iter()
    }
}
