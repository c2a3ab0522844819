//! striped-hashtable: a fixed-capacity hash table from byte-string keys
//! to integer values, shared by many threads with one lock per slot.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: let threads touching different slots run in parallel while
//!   operations on the same slot are serialized, with no global lock.
//! - Layers:
//!   - `hash`: djb2 over the key bytes, reduced modulo capacity.
//!   - `Chain`: the entries of one slot as a circular doubly linked list
//!     with a sentinel, stored in a `SlotMap` node arena.
//!   - `LockTable<T>`: exactly one `parking_lot::Mutex<T>` per slot.
//!   - `HashTable<S>`: a `LockTable<Option<Chain>>` plus the hasher;
//!     public `new`/`insert`/`search`/`destroy`.
//!
//! Constraints
//! - Capacity is fixed at construction; there is no rehashing, so chain
//!   scans grow linearly once the table is crowded.
//! - No deletion. `insert` on an existing key overwrites its value.
//! - Keys are owned byte strings compared byte for byte; the empty key is
//!   valid. Values are `i32`.
//!
//! Locking
//! - A slot's chain lives inside that slot's mutex, so `insert` and
//!   `search` cannot reach a chain without holding its lock, and the lock
//!   count always equals the capacity.
//! - Every operation takes exactly one lock, so there is no lock ordering
//!   to get wrong.
//! - `destroy` consumes the table; the borrow checker rejects it while
//!   any other thread still holds a reference.
//!
//! Errors
//! - Construction returns `TableError::InvalidArgument` for a zero
//!   capacity and `TableError::AllocationFailed` when the slot array cannot
//!   be reserved. Once built, `insert` and `search` cannot fail; a miss is
//!   `None`.

pub mod chain;
mod error;
pub mod hash;
mod hash_table;
mod hash_table_proptest;
pub mod lock_table;
pub mod workload;

// Public surface
pub use chain::{Entry, Value};
pub use error::{Result, TableError};
pub use hash::{djb2, slot_index, BuildDjb2, Djb2Hasher};
pub use hash_table::{HashTable, DEFAULT_CAPACITY};
