//! LockTable: one mutex per slot.
//!
//! Each stripe owns the state of exactly one slot, so a slot can only be
//! reached through its lock on shared paths. Exclusive paths (`&mut self`,
//! `self`) go through `get_mut`/`into_inner` and take no lock.

use crate::error::{Result, TableError};
use parking_lot::{Mutex, MutexGuard};

pub struct LockTable<T> {
    stripes: Box<[Mutex<T>]>,
}

impl<T> LockTable<T> {
    /// Build `len` initialized stripes, the `i`th holding `init(i)`.
    pub fn try_new_with<F>(len: usize, mut init: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        let mut stripes = Vec::new();
        stripes
            .try_reserve_exact(len)
            .map_err(|_| TableError::AllocationFailed { slots: len })?;
        for i in 0..len {
            stripes.push(Mutex::new(init(i)));
        }
        Ok(Self {
            stripes: stripes.into_boxed_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.stripes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stripes.is_empty()
    }

    /// Block until stripe `index` is free and return its guard.
    ///
    /// # Panics
    /// If `index >= self.len()`, like slice indexing.
    #[inline]
    pub fn lock(&self, index: usize) -> MutexGuard<'_, T> {
        self.stripes[index].lock()
    }

    /// Exclusive access without locking.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.stripes.get_mut(index).map(|m| m.get_mut())
    }

    /// Consume the table and yield every stripe's state in index order.
    pub fn into_inner(self) -> impl Iterator<Item = T> {
        self.stripes.into_vec().into_iter().map(|m| m.into_inner())
    }
}
