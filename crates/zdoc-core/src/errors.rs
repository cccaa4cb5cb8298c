//! Error types for zdoc-core.
//!
//! Every fallible operation in this crate returns [`DocError`]. Growth
//! failures carry the [`Container`] whose buffer could not be extended so
//! callers can tell an oversized entry from an oversized registry.

use std::fmt;

use thiserror::Error;

/// The growable buffer an operation was trying to extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The argument list owned by a single entry.
    ArgList,
    /// The entry sequence owned by a registry.
    Registry,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgList => f.write_str("argument list"),
            Self::Registry => f.write_str("entry registry"),
        }
    }
}

/// Errors raised by the docstring containers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// A backing buffer could not grow to hold another item.
    ///
    /// Raised both when the allocator refuses the reservation and when a
    /// configured capacity ceiling is reached. The item that triggered the
    /// growth has been dropped.
    #[error("Allocation failure: cannot grow {container} to {requested} slots")]
    AllocationFailure {
        container: Container,
        requested: usize,
    },

    /// Input violated a precondition (e.g. an empty type label).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An entry was added directly while its type label was already present.
    #[error("Duplicate type label: {0}")]
    DuplicateType(String),
}

impl DocError {
    /// Whether this error signals resource exhaustion.
    #[must_use]
    pub const fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_failure_names_the_container() {
        let error = DocError::AllocationFailure {
            container: Container::ArgList,
            requested: 8,
        };
        assert_eq!(
            error.to_string(),
            "Allocation failure: cannot grow argument list to 8 slots"
        );
        assert!(error.is_allocation_failure());
    }

    #[test]
    fn precondition_errors_are_not_allocation_failures() {
        let error = DocError::InvalidArgument("type label must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid argument: type label must not be empty"
        );
        assert!(!error.is_allocation_failure());
        assert!(!DocError::DuplicateType("Param".into()).is_allocation_failure());
    }
}
