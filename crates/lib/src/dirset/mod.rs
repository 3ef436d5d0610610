//! Lazily resolved directory sets.
//!
//! A component declares its input locations up front but nothing is read
//! from disk until a consumer pulls them. Three layers cooperate:
//!
//! - [`DirectoryCollection`] - the mutable, shared list of explicitly
//!   configured roots
//! - [`DirectorySetView`] - a read-only view that falls back to a convention
//!   path while the collection is empty
//! - [`FileTree`] - a union of views projected through a [`PatternSet`],
//!   materialized by a [`crate::walk::FileWalker`]
//!
//! Every read re-evaluates the current configuration. Nothing is cached, so
//! configuration applied after a view was handed out is still honored.

mod tree;
mod types;

pub use tree::*;
pub use types::*;
