//! HashTable: fixed-capacity separate chaining with one lock per slot.

use crate::chain::{Chain, Entry, Value};
use crate::error::{Result, TableError};
use crate::hash::{reduce, BuildDjb2};
use crate::lock_table::LockTable;
use core::fmt;
use core::hash::{BuildHasher, Hasher};
use tracing::{debug, trace};

/// Capacity used when callers have no better estimate.
pub const DEFAULT_CAPACITY: usize = 64;

/// A byte-string to integer table shared by many threads.
///
/// Every slot's chain sits inside that slot's mutex, so the number of locks
/// always equals the capacity, and both `insert` and `search` hold the slot
/// lock for the whole time they touch the chain.
pub struct HashTable<S = BuildDjb2> {
    capacity: usize,
    slots: LockTable<Option<Chain>>, // chains are created lazily on first insert
    hasher: S,
}

impl HashTable {
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, BuildDjb2)
    }
}

impl<S> HashTable<S>
where
    S: BuildHasher,
{
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self> {
        if capacity < 1 {
            return Err(TableError::InvalidArgument {
                argument: "capacity",
                reason: "must be at least 1",
            });
        }
        let slots = LockTable::try_new_with(capacity, |_| None)?;
        debug!(capacity, "created hash table");
        Ok(Self {
            capacity,
            slots,
            hasher,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot index for `key`, always in `[0, capacity)`.
    pub fn slot_of(&self, key: impl AsRef<[u8]>) -> usize {
        let mut h = self.hasher.build_hasher();
        h.write(key.as_ref());
        // capacity >= 1 is checked at construction
        reduce(h.finish(), self.capacity).unwrap_or(0)
    }

    /// Insert or overwrite. Returns the previous value if `key` was present.
    pub fn insert(&self, key: impl AsRef<[u8]>, value: Value) -> Option<Value> {
        let key = key.as_ref();
        let index = self.slot_of(key);
        let mut slot = self.slots.lock(index);
        let chain = slot.get_or_insert_with(|| {
            trace!(slot = index, "allocating chain");
            Chain::new()
        });
        match chain.find_mut(key) {
            Some(entry) => Some(entry.replace_value(value)),
            None => {
                chain.append(Entry::new(key, value));
                None
            }
        }
    }

    /// Value stored under `key`, read while holding the slot lock.
    pub fn search(&self, key: impl AsRef<[u8]>) -> Option<Value> {
        let key = key.as_ref();
        let slot = self.slots.lock(self.slot_of(key));
        slot.as_ref()?.find(key).map(Entry::value)
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.search(key).is_some()
    }

    /// Number of distinct keys.
    ///
    /// Slots are locked one at a time, so the count is only exact while no
    /// insert is in flight.
    pub fn len(&self) -> usize {
        (0..self.capacity)
            .map(|i| self.slots.lock(i).as_ref().map_or(0, Chain::len))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries chained at slot `index`; `None` if `index >= capacity`.
    pub fn slot_len(&self, index: usize) -> Option<usize> {
        if index >= self.capacity {
            return None;
        }
        Some(self.slots.lock(index).as_ref().map_or(0, Chain::len))
    }

    /// Release every chain, entry and lock. Returns the number of entries
    /// released. Taking `self` rules out any operation in flight.
    pub fn destroy(self) -> usize {
        let capacity = self.capacity;
        let released: usize = self
            .slots
            .into_inner()
            .map(|slot| slot.map_or(0, Chain::destroy))
            .sum();
        debug!(capacity, released, "destroyed hash table");
        released
    }
}

impl<S> fmt::Display for HashTable<S>
where
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.capacity {
            writeln!(f, "Bucket {}", i)?;
            if let Some(chain) = self.slots.lock(i).as_ref() {
                write!(f, "{}", chain)?;
            }
        }
        Ok(())
    }
}

impl<S> fmt::Debug for HashTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
