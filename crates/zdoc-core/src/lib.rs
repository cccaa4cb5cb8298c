//! # zdoc-core
//!
//! In-memory registry of docstring entries for zdoc.
//!
//! An upstream scanner discovers `(type, arg)` pairs in source annotations and
//! feeds them into a [`DocRegistry`]. The registry keeps one [`DocEntry`] per
//! distinct type label and appends every argument to the entry that owns its
//! label, so downstream renderers see each documentation category exactly once:
//! - [`ArgList`]: append-only, insertion-ordered argument strings
//! - [`DocEntry`]: a type label bound to its `ArgList`
//! - [`DocRegistry`]: insertion-ordered entries with merge-on-insert
//! - [`DocError`]: allocation and precondition failures
//!
//! All containers take ownership of the strings handed to them. A duplicate
//! type label passed to [`DocRegistry::merge_insert`] is dropped before the
//! call returns, and an item whose insertion fails is always consumed.
//!
//! ```
//! use zdoc_core::DocRegistry;
//!
//! let mut registry = DocRegistry::new();
//! registry.merge_insert("Param".to_string(), "x: int".to_string())?;
//! registry.merge_insert("Returns".to_string(), "bool".to_string())?;
//! registry.merge_insert("Param".to_string(), "y: int".to_string())?;
//!
//! let kinds: Vec<&str> = registry.iter().map(|entry| entry.kind()).collect();
//! assert_eq!(kinds, ["Param", "Returns"]);
//! # Ok::<(), zdoc_core::DocError>(())
//! ```

pub mod arg_list;
pub mod entry;
pub mod errors;
mod growth;
pub mod registry;

pub use arg_list::ArgList;
pub use entry::DocEntry;
pub use errors::{Container, DocError};
pub use registry::{DocRegistry, RegistryOptions};
