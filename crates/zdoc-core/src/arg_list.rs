//! Append-only list of argument strings owned by one entry.

use serde::{Serialize, Serializer};

use crate::errors::{Container, DocError};
use crate::growth;

/// Insertion-ordered argument strings for a single docstring entry.
///
/// The list only grows: there is no removal, lookup by value, or mutation of
/// stored items. Duplicate values are kept. `S` is the owned string type,
/// `String` unless the caller supplies its own.
#[derive(Debug)]
pub struct ArgList<S = String> {
    items: Vec<S>,
    capacity: usize,
    ceiling: Option<usize>,
}

impl<S> ArgList<S> {
    /// An empty list with no storage reserved.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
            ceiling: None,
        }
    }

    /// An empty list with storage reserved for `initial_capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::AllocationFailure`] if the reservation cannot be
    /// satisfied.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, DocError> {
        Self::with_ceiling(initial_capacity, None)
    }

    /// Like [`with_capacity`](Self::with_capacity), refusing to hold more
    /// than `ceiling` items when one is given.
    pub(crate) fn with_ceiling(
        initial_capacity: usize,
        ceiling: Option<usize>,
    ) -> Result<Self, DocError> {
        Ok(Self {
            items: growth::reserve_initial(Container::ArgList, initial_capacity)?,
            capacity: initial_capacity,
            ceiling,
        })
    }

    /// Take ownership of `arg` and store it after every existing item.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::AllocationFailure`] when the list is full and
    /// cannot grow. The list is unchanged and `arg` is dropped.
    pub fn append(&mut self, arg: S) -> Result<(), DocError> {
        growth::reserve_slot(
            &mut self.items,
            &mut self.capacity,
            self.ceiling,
            Container::ArgList,
        )?;
        self.items.push(arg);
        Ok(())
    }

    /// Replace the item ceiling enforced by later appends.
    pub(crate) const fn set_ceiling(&mut self, ceiling: Option<usize>) {
        self.ceiling = ceiling;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots reserved before the next doubling.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.items.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[S] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.items.iter()
    }

    /// Drop every stored string, then the backing storage.
    pub fn release(self) {
        let released = self.items.len();
        drop(self.items);
        tracing::trace!(released, "released argument list");
    }
}

impl<S: AsRef<str>> ArgList<S> {
    /// Borrow every argument as `&str`, in insertion order.
    pub fn strs(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(AsRef::as_ref)
    }
}

impl<S> Default for ArgList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S> IntoIterator for &'a ArgList<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<S> IntoIterator for ArgList<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<S: Serialize> Serialize for ArgList<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(&self.items)
    }
}
