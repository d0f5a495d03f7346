//! A list backed by one contiguous, growable allocation.
//!
//! Elements live in a boxed slice whose length is the capacity of the list.
//! Only the first `len` slots are elements; the remaining slots are spare
//! room for insertions. When an insertion finds no spare slot, the slice is
//! replaced by one of twice the size, which keeps appending amortized O(1).

use std::{fmt, mem};

use log::trace;

use crate::{
    error::ListError,
    list::{self, List},
};

/// Capacity of a list created with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// An array-backed list of `i32` values.
///
/// Indexed access is O(1). Inserting or removing at `index` moves the
/// `len() - index` elements behind it, so mid-sequence mutation of large
/// lists is O(n).
///
/// # Examples
///
/// ```
/// use klist_collections::{ArrayList, List};
///
/// let mut list = ArrayList::with_capacity(1);
/// list.add_last(0).unwrap();
/// list.add_last(10).unwrap();
///
/// assert_eq!(list.capacity(), 2);
/// assert_eq!(list.to_string(), "ArrayList=[0, 10]");
/// ```
#[derive(Clone)]
pub struct ArrayList {
    store: Box<[i32]>,
    len: usize,
}

impl ArrayList {
    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation size exceeds `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayList {
            store: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the number of elements the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Reallocates the backing store so that the capacity equals the length.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.capacity() {
            trace!(
                old_capacity = self.capacity(),
                new_capacity = self.len,
                "Shrinking backing store"
            );
            self.store = self.elements().into();
        }
    }

    #[inline]
    fn elements(&self) -> &[i32] {
        &self.store[..self.len]
    }

    fn grow(&mut self) -> Result<(), ListError> {
        let old_capacity = self.capacity();
        let new_capacity = next_capacity(old_capacity).ok_or(ListError::CapacityOverflow)?;

        let mut store = Vec::new();
        store
            .try_reserve_exact(new_capacity)
            .map_err(|_| ListError::CapacityOverflow)?;
        store.extend_from_slice(self.elements());
        store.resize(new_capacity, 0);

        trace!(old_capacity, new_capacity, "Growing backing store");
        self.store = store.into_boxed_slice();
        Ok(())
    }
}

/// The capacity to grow to from `capacity`, or `None` on overflow.
fn next_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(1)
    } else {
        capacity.checked_mul(2)
    }
}

impl Default for ArrayList {
    fn default() -> Self {
        Self::new()
    }
}

impl List for ArrayList {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<i32, ListError> {
        self.elements()
            .get(index)
            .copied()
            .ok_or(ListError::IndexOutOfBounds {
                index,
                size: self.len,
            })
    }

    fn set(&mut self, index: usize, value: i32) -> Result<i32, ListError> {
        let size = self.len;
        let slot = self.store[..size]
            .get_mut(index)
            .ok_or(ListError::IndexOutOfBounds { index, size })?;
        Ok(mem::replace(slot, value))
    }

    fn add(&mut self, index: usize, value: i32) -> Result<(), ListError> {
        list::check_position(index, self.len)?;
        if self.len == self.capacity() {
            self.grow()?;
        }

        // Make room.
        self.store.copy_within(index..self.len, index + 1);
        self.store[index] = value;
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<i32, ListError> {
        list::check_index(index, self.len)?;
        let value = self.store[index];

        // Close the gap.
        self.store.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    fn clear(&mut self) {
        if self.len > 0 {
            trace!(dropped = self.len, "Clearing list");
        }
        self.len = 0;
    }

    fn contains(&self, value: i32) -> bool {
        self.elements().contains(&value)
    }
}

impl PartialEq for ArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.elements() == other.elements()
    }
}

impl Eq for ArrayList {}

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

impl fmt::Display for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list::fmt_named(f, "ArrayList", self.elements().iter().copied())
    }
}
