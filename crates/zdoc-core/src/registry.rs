//! Insertion-ordered registry of docstring entries with merge-on-insert.
//!
//! [`DocRegistry::merge_insert`] is the operation this crate exists for: it
//! scans the entries in insertion order for one whose type label matches and
//! either appends the argument there or creates a new entry at the end. Labels
//! compare by exact, case-sensitive string equality, so the registry never
//! holds two entries with the same label.
//!
//! Lookup is a linear scan. The number of distinct labels seen while
//! documenting one unit is small, and the scan keeps iteration order and
//! storage in a single `Vec`.

use serde::{Serialize, Serializer};

use crate::entry::{DocEntry, validate_kind};
use crate::errors::{Container, DocError};
use crate::growth;

/// Sizing and growth limits for a [`DocRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Entry slots reserved when the registry is created.
    pub initial_capacity: usize,
    /// Argument slots reserved for each entry created by `merge_insert`.
    pub arg_capacity: usize,
    /// Maximum number of entries; further growth raises `AllocationFailure`.
    pub max_entries: Option<usize>,
    /// Maximum number of arguments per entry created by `merge_insert`.
    pub max_args_per_entry: Option<usize>,
}

impl RegistryOptions {
    /// No pre-allocation, single-slot argument lists, no ceilings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: 0,
            arg_capacity: 1,
            max_entries: None,
            max_args_per_entry: None,
        }
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered set of docstring entries, unique by type label.
///
/// Entries appear in the order their label was first seen. The registry owns
/// every entry, label and argument; [`release`](Self::release) or dropping
/// the registry frees them all.
#[derive(Debug)]
pub struct DocRegistry<S = String> {
    entries: Vec<DocEntry<S>>,
    capacity: usize,
    options: RegistryOptions,
}

impl<S> DocRegistry<S> {
    /// An empty registry with no storage reserved and no limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity: 0,
            options: RegistryOptions::new(),
        }
    }

    /// An empty registry with storage reserved for `initial_capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::AllocationFailure`] if the reservation cannot be
    /// satisfied.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, DocError> {
        Self::with_options(RegistryOptions {
            initial_capacity,
            ..RegistryOptions::default()
        })
    }

    /// An empty registry sized and limited by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::AllocationFailure`] if the initial reservation
    /// cannot be satisfied.
    pub fn with_options(options: RegistryOptions) -> Result<Self, DocError> {
        Ok(Self {
            entries: growth::reserve_initial(Container::Registry, options.initial_capacity)?,
            capacity: options.initial_capacity,
            options,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry slots reserved before the next doubling.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub const fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Traverse entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocEntry<S>> {
        self.entries.iter()
    }

    /// Release every entry (and transitively its arguments and label), then
    /// the entry storage.
    pub fn release(self) {
        let Self { entries, .. } = self;
        let entry_count = entries.len();
        let arg_count: usize = entries.iter().map(|entry| entry.args().len()).sum();
        for entry in entries {
            entry.release();
        }
        tracing::debug!(
            entries = entry_count,
            args = arg_count,
            "released docstring registry"
        );
    }

    fn push_entry(&mut self, entry: DocEntry<S>) -> Result<(), DocError> {
        growth::reserve_slot(
            &mut self.entries,
            &mut self.capacity,
            self.options.max_entries,
            Container::Registry,
        )?;
        self.entries.push(entry);
        Ok(())
    }
}

impl<S: AsRef<str>> DocRegistry<S> {
    /// Append `entry` after every existing entry.
    ///
    /// The registry's `max_args_per_entry` ceiling applies to the entry from
    /// then on, so later merges into it are bounded like any other entry.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateType`] if an entry with the same label is
    /// already registered, or [`DocError::AllocationFailure`] if the entry
    /// already holds more arguments than the ceiling allows or the entry
    /// storage cannot grow. Existing entries are untouched and `entry` is
    /// dropped in every case.
    pub fn add_entry(&mut self, mut entry: DocEntry<S>) -> Result<(), DocError> {
        if self.contains(entry.kind()) {
            tracing::warn!(kind = entry.kind(), "rejected duplicate docstring entry");
            return Err(DocError::DuplicateType(entry.kind().to_string()));
        }
        let ceiling = self.options.max_args_per_entry;
        let held = entry.args().len();
        if let Some(max) = ceiling
            && held > max
        {
            tracing::warn!(
                kind = entry.kind(),
                held,
                max,
                "rejected docstring entry over argument ceiling"
            );
            return Err(DocError::AllocationFailure {
                container: Container::ArgList,
                requested: held,
            });
        }
        entry.set_arg_ceiling(ceiling);
        self.push_entry(entry)
    }

    /// Record `arg` under the type label `kind`.
    ///
    /// If an entry labelled `kind` exists, `arg` is appended to it and `kind`
    /// is dropped, since the stored label already owns that text. Otherwise a
    /// new entry is created for `kind`, holding `arg`, at the end of the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidArgument`] for an empty label and
    /// [`DocError::AllocationFailure`] when either the entry's argument list
    /// or the registry cannot grow. On error the registry is unchanged and
    /// both strings are dropped.
    pub fn merge_insert(&mut self, kind: S, arg: S) -> Result<(), DocError> {
        validate_kind(&kind)?;

        if let Some(index) = self.position(kind.as_ref()) {
            drop(kind);
            let entry = &mut self.entries[index];
            tracing::trace!(kind = entry.kind(), "merging argument into existing entry");
            return entry.add_arg(arg);
        }

        let mut entry = DocEntry::with_ceiling(
            kind,
            self.options.arg_capacity,
            self.options.max_args_per_entry,
        )?;
        entry.add_arg(arg)?;
        tracing::debug!(
            kind = entry.kind(),
            index = self.entries.len(),
            "new docstring entry"
        );
        self.push_entry(entry)
    }

    /// Merge-insert every `(kind, arg)` pair in order, stopping at the first
    /// failure.
    ///
    /// Returns the number of pairs merged.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`merge_insert`](Self::merge_insert).
    /// Pairs merged before it stay in the registry; the remaining pairs are
    /// dropped unread.
    pub fn merge_all<I>(&mut self, pairs: I) -> Result<usize, DocError>
    where
        I: IntoIterator<Item = (S, S)>,
    {
        let mut merged = 0;
        for (kind, arg) in pairs {
            self.merge_insert(kind, arg)?;
            merged += 1;
        }
        Ok(merged)
    }

    /// The entry labelled `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&DocEntry<S>> {
        self.entries.iter().find(|entry| entry.kind() == kind)
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.position(kind).is_some()
    }

    fn position(&self, kind: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.kind() == kind)
    }
}

impl<S> Default for DocRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S> IntoIterator for &'a DocRegistry<S> {
    type Item = &'a DocEntry<S>;
    type IntoIter = std::slice::Iter<'a, DocEntry<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S> IntoIterator for DocRegistry<S> {
    type Item = DocEntry<S>;
    type IntoIter = std::vec::IntoIter<DocEntry<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<S: Serialize> Serialize for DocRegistry<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(&self.entries)
    }
}
