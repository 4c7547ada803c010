//! In-memory node store.
//!
//! A `Vec` of records addressed by validated index. Deleted records stay in
//! place as tombstones so ids remain stable for the life of the graph.

use std::marker::PhantomData;

use super::{Record, StoreId};

// ============================================================================
// NodeStore
// ============================================================================

#[derive(Debug, Clone)]
pub struct NodeStore<K, T> {
    records: Vec<T>,
    _key: PhantomData<K>,
}

impl<K: StoreId, T: Record> Default for NodeStore<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StoreId, T: Record> NodeStore<K, T> {
    pub fn new() -> Self {
        Self { records: Vec::new(), _key: PhantomData }
    }

    /// Append a record built from its freshly assigned id.
    pub fn append(&mut self, build: impl FnOnce(K) -> T) -> K {
        let id = K::from_index(self.records.len());
        self.records.push(build(id));
        id
    }

    /// # Panics
    ///
    /// If `id` was never allocated or has been deleted.
    pub fn get(&self, id: K) -> &T {
        match self.records.get(id.index()) {
            Some(record) if !record.is_dead() => record,
            Some(_) => panic!("record {id} is dead"),
            None => panic!("record {id} does not exist"),
        }
    }

    /// # Panics
    ///
    /// If `id` was never allocated or has been deleted.
    pub fn get_mut(&mut self, id: K) -> &mut T {
        match self.records.get_mut(id.index()) {
            Some(record) if !record.is_dead() => record,
            Some(_) => panic!("record {id} is dead"),
            None => panic!("record {id} does not exist"),
        }
    }

    pub fn try_get(&self, id: K) -> Option<&T> {
        self.records.get(id.index()).filter(|r| !r.is_dead())
    }

    /// Look up a record whether or not it is dead.
    pub fn record(&self, id: K) -> Option<&T> {
        self.records.get(id.index())
    }

    /// Tombstone a record. Returns true if it was live.
    pub fn delete(&mut self, id: K) -> bool {
        match self.records.get_mut(id.index()) {
            Some(record) if !record.is_dead() => {
                record.tombstone();
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_dead()).count()
    }

    pub fn live_ids(&self) -> impl Iterator<Item = K> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_dead())
            .map(|(i, _)| K::from_index(i))
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &T> + '_ {
        self.records.iter().filter(|r| !r.is_dead())
    }
}

// ============================================================================
// Tests
// ============================================================================
