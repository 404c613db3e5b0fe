use std::sync::Arc;

use tokio::sync::RwLock;

use crate::content::domain::resource::ResourceKind;

/// Ordered in-memory copy of one remote collection.
///
/// Only ever written from confirmed server responses; readers poll
/// `version` to learn that something changed.
#[derive(Debug)]
pub struct CollectionStore<E> {
    entries: Vec<E>,
    version: u64,
}

pub type SharedStore<E> = Arc<RwLock<CollectionStore<E>>>;

impl<E> CollectionStore<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            version: 0,
        }
    }

    pub fn shared() -> SharedStore<E> {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn replace_all(&mut self, entries: Vec<E>) {
        self.entries = entries;
        self.version += 1;
    }

    /// Appends the canonical record at the tail.
    pub fn push(&mut self, entry: E) {
        self.entries.push(entry);
        self.version += 1;
    }
}

impl<E> Default for CollectionStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ResourceKind> CollectionStore<E> {
    /// Replaces the entry with the given id in place, leaving every other
    /// entry and the ordering untouched. Returns false when no entry
    /// matches.
    pub fn replace_by_id(&mut self, id: &str, entry: E) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(slot) => {
                *slot = entry;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the given id. Returns false when no entry
    /// matches.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);

        let removed = self.entries.len() != before;
        if removed {
            self.version += 1;
        }
        removed
    }
}
