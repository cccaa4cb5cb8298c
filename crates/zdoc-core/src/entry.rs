//! A type label bound to its argument list.

use serde::Serialize;

use crate::arg_list::ArgList;
use crate::errors::DocError;

/// One merged docstring entry: a type label and every argument recorded for it.
///
/// The label is fixed at construction and is the key a
/// [`DocRegistry`](crate::DocRegistry) deduplicates on.
#[derive(Debug, Serialize)]
pub struct DocEntry<S = String> {
    #[serde(rename = "type")]
    kind: S,
    args: ArgList<S>,
}

impl<S: AsRef<str>> DocEntry<S> {
    /// Create an entry for `kind` with room for `initial_capacity` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidArgument`] if `kind` is empty, or
    /// [`DocError::AllocationFailure`] if the argument storage cannot be
    /// reserved. `kind` is dropped in both cases.
    pub fn new(kind: S, initial_capacity: usize) -> Result<Self, DocError> {
        Self::with_ceiling(kind, initial_capacity, None)
    }

    pub(crate) fn with_ceiling(
        kind: S,
        initial_capacity: usize,
        ceiling: Option<usize>,
    ) -> Result<Self, DocError> {
        validate_kind(&kind)?;
        Ok(Self {
            args: ArgList::with_ceiling(initial_capacity, ceiling)?,
            kind,
        })
    }

    /// The type label this entry is keyed by.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_ref()
    }
}

impl<S> DocEntry<S> {
    /// Append `arg` to this entry's argument list.
    ///
    /// # Errors
    ///
    /// Propagates [`DocError::AllocationFailure`] from [`ArgList::append`].
    pub fn add_arg(&mut self, arg: S) -> Result<(), DocError> {
        self.args.append(arg)
    }

    pub(crate) const fn set_arg_ceiling(&mut self, ceiling: Option<usize>) {
        self.args.set_ceiling(ceiling);
    }

    #[must_use]
    pub const fn args(&self) -> &ArgList<S> {
        &self.args
    }

    /// Split the entry into its label and arguments.
    pub fn into_parts(self) -> (S, ArgList<S>) {
        (self.kind, self.args)
    }

    /// Release the argument list, then the type label.
    pub fn release(self) {
        let Self { kind, args } = self;
        args.release();
        drop(kind);
    }
}

/// Reject type labels that cannot serve as a dedup key.
pub(crate) fn validate_kind<S: AsRef<str>>(kind: &S) -> Result<(), DocError> {
    if kind.as_ref().is_empty() {
        tracing::warn!("rejected docstring entry with empty type label");
        return Err(DocError::InvalidArgument(
            "type label must not be empty".to_string(),
        ));
    }
    Ok(())
}
