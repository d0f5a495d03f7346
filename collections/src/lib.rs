//! Ordered, indexable, mutable lists of `i32` values.
//!
//! The operation set is defined by the [`List`] trait. Two implementations
//! are provided:
//!
//! - [`ArrayList`] keeps the elements in one contiguous allocation. Indexed
//!   access is O(1) and appending is amortized O(1), while inserting or
//!   removing in the middle shifts the elements behind the position.
//! - [`LinkedList`] keeps the elements in doubly-linked nodes. Both ends are
//!   O(1), while reaching a position walks the nodes from the closer end.
//!
//! `ArrayList` is the default choice. Prefer `LinkedList` only when most
//! mutations happen at the ends of large lists and positional access is rare.
//!
//! ```
//! use klist_collections::{ArrayList, List, ListError};
//!
//! let mut list = ArrayList::new();
//! list.add_last(5)?;
//! list.add_last(7)?;
//! list.add_first(3)?;
//! assert_eq!(list.to_string(), "ArrayList=[3, 5, 7]");
//!
//! assert_eq!(list.set(1, 9)?, 5);
//! assert_eq!(list.remove(0)?, 3);
//! assert_eq!(list.get(2), Err(ListError::IndexOutOfBounds { index: 2, size: 2 }));
//! # Ok::<(), ListError>(())
//! ```

pub mod array_list;
pub mod error;
pub mod linked_list;
pub mod list;

pub use self::array_list::ArrayList;
pub use self::error::ListError;
pub use self::linked_list::LinkedList;
pub use self::list::List;
