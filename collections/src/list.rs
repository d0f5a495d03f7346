use std::fmt;

use crate::error::ListError;

/// An ordered, indexable, mutable sequence of `i32` values.
///
/// Positions are zero-based and always refer to the elements currently in the
/// list, `0..len()`. Duplicate values are allowed.
///
/// Operations taking an explicit index fail with
/// [`ListError::IndexOutOfBounds`] when the index is outside the range they
/// accept. The first/last accessors and removers take no index and fail with
/// [`ListError::Empty`] instead when there is nothing to act on.
pub trait List {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<i32, ListError>;

    /// Overwrites the element at `index` and returns the value it replaced.
    /// No elements are moved.
    fn set(&mut self, index: usize, value: i32) -> Result<i32, ListError>;

    /// Inserts `value` so that it becomes the element at `index`, moving every
    /// element at or after `index` one position up.
    ///
    /// `index == len()` appends. Any larger index is rejected.
    fn add(&mut self, index: usize, value: i32) -> Result<(), ListError>;

    /// Removes and returns the element at `index`, moving every element after
    /// it one position down.
    fn remove(&mut self, index: usize) -> Result<i32, ListError>;

    /// Removes all elements. Calling it on an empty list does nothing.
    fn clear(&mut self);

    /// Returns `true` if any element equals `value`.
    ///
    /// This operation computes in O(n) time and stops at the first match.
    fn contains(&self, value: i32) -> bool;

    /// Returns `true` if the list has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first element.
    fn get_first(&self) -> Result<i32, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.get(0)
    }

    /// Returns the last element.
    fn get_last(&self) -> Result<i32, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.get(self.len() - 1)
    }

    /// Inserts `value` in front of all other elements.
    fn add_first(&mut self, value: i32) -> Result<(), ListError> {
        self.add(0, value)
    }

    /// Appends `value` behind all other elements.
    fn add_last(&mut self, value: i32) -> Result<(), ListError> {
        self.add(self.len(), value)
    }

    /// Removes and returns the first element.
    fn remove_first(&mut self) -> Result<i32, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.remove(0)
    }

    /// Removes and returns the last element.
    ///
    /// This removes from the tail; it never searches for a value.
    fn remove_last(&mut self) -> Result<i32, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.remove(self.len() - 1)
    }
}

/// Fails unless `index` addresses an existing element.
#[inline]
pub(crate) fn check_index(index: usize, size: usize) -> Result<(), ListError> {
    if index < size {
        Ok(())
    } else {
        Err(ListError::IndexOutOfBounds { index, size })
    }
}

/// Fails unless `index` is a valid insertion point, which includes `size`.
#[inline]
pub(crate) fn check_position(index: usize, size: usize) -> Result<(), ListError> {
    if index <= size {
        Ok(())
    } else {
        Err(ListError::IndexOutOfBounds { index, size })
    }
}

/// Writes `name=[a, b, c]`.
pub(crate) fn fmt_named<I>(f: &mut fmt::Formatter<'_>, name: &str, values: I) -> fmt::Result
where
    I: IntoIterator<Item = i32>,
{
    write!(f, "{name}=[")?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_checks_use_exclusive_and_inclusive_bounds() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(
            check_index(1, 1),
            Err(ListError::IndexOutOfBounds { index: 1, size: 1 })
        );
        assert_eq!(check_position(1, 1), Ok(()));
        assert_eq!(
            check_position(2, 1),
            Err(ListError::IndexOutOfBounds { index: 2, size: 1 })
        );
        assert!(check_index(0, 0).is_err());
        assert_eq!(check_position(0, 0), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ListError::IndexOutOfBounds { index: 3, size: 1 }.to_string(),
            "Index out of bounds: 3, size: 1"
        );
        assert_eq!(ListError::Empty.to_string(), "The list is empty!");
        assert_eq!(
            ListError::CapacityOverflow.to_string(),
            "The array exceeds its max capacity!"
        );
    }
}
