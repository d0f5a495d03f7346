//! A doubly-linked list whose nodes are owned by a slab.
//!
//! Nodes are stored in a `Vec` and address their neighbours by slot index
//! instead of by pointer. Slots vacated by removals are remembered and reused
//! by later insertions, and the whole slab is released once the list becomes
//! empty.
//!
//! The `LinkedList` allows adding and removing elements at either end in
//! constant time. Reaching an arbitrary position walks the links from
//! whichever end is closer.

use std::{fmt, iter::FusedIterator};

use log::trace;

use crate::{
    error::ListError,
    list::{self, List},
};

#[derive(Clone, Copy, Debug)]
struct Node {
    value: i32,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A node-backed list of `i32` values.
///
/// # Examples
///
/// ```
/// use klist_collections::{LinkedList, List};
///
/// let mut list = LinkedList::new();
/// list.add_last(2).unwrap();
/// list.add_first(1).unwrap();
/// list.add(1, 5).unwrap();
///
/// assert_eq!(list.remove_last(), Ok(2));
/// assert_eq!(list.to_string(), "LinkedList=[1, 5]");
/// ```
#[derive(Clone, Default)]
pub struct LinkedList {
    nodes: Vec<Node>,
    free_slots: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl LinkedList {
    /// Creates an empty `LinkedList`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            size: self.len,
        }
    }

    /// Finds the slot of the node at `index`, walking from the closer end.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut slot = self.head?;
            for _ in 0..index {
                slot = self.nodes[slot].next?;
            }
            Some(slot)
        } else {
            let mut slot = self.tail?;
            for _ in index + 1..self.len {
                slot = self.nodes[slot].prev?;
            }
            Some(slot)
        }
    }

    fn allocate(&mut self, node: Node) -> usize {
        match self.free_slots.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Links a new node in front of the node in slot `next`, or behind the
    /// tail if `next` is `None`.
    fn link_before(&mut self, next: Option<usize>, value: i32) {
        let prev = match next {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        let slot = self.allocate(Node { value, prev, next });

        match prev {
            Some(prev) => self.nodes[prev].next = Some(slot),
            None => self.head = Some(slot),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.len += 1;
    }

    /// Detaches the node in `slot` and returns its value.
    fn unlink(&mut self, slot: usize) -> i32 {
        let node = self.nodes[slot];

        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;

        if self.len == 0 {
            self.release_slab();
        } else {
            self.free_slots.push(slot);
        }
        node.value
    }

    fn release_slab(&mut self) {
        self.nodes.clear();
        self.free_slots.clear();
        self.head = None;
        self.tail = None;
    }

    fn values(&self) -> Values<'_> {
        Values {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl List for LinkedList {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<i32, ListError> {
        self.slot_at(index)
            .map(|slot| self.nodes[slot].value)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn set(&mut self, index: usize, value: i32) -> Result<i32, ListError> {
        let slot = self.slot_at(index).ok_or_else(|| self.out_of_bounds(index))?;
        let old = self.nodes[slot].value;
        self.nodes[slot].value = value;
        Ok(old)
    }

    fn add(&mut self, index: usize, value: i32) -> Result<(), ListError> {
        list::check_position(index, self.len)?;
        let next = if index == self.len {
            None
        } else {
            Some(self.slot_at(index).ok_or_else(|| self.out_of_bounds(index))?)
        };
        self.link_before(next, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<i32, ListError> {
        let slot = self.slot_at(index).ok_or_else(|| self.out_of_bounds(index))?;
        Ok(self.unlink(slot))
    }

    fn clear(&mut self) {
        if self.len > 0 {
            trace!(dropped = self.len, "Clearing list");
        }
        self.release_slab();
        self.len = 0;
    }

    fn contains(&self, value: i32) -> bool {
        self.values().any(|v| v == value)
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        list::fmt_named(f, "LinkedList", self.values())
    }
}

/// Front-to-back walk over the values, used internally.
struct Values<'a> {
    nodes: &'a [Node],
    cursor: Option<usize>,
}

impl Iterator for Values<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        Some(node.value)
    }
}

impl FusedIterator for Values<'_> {}
