//! Dependency declarations.
//!
//! Source sets and buckets both carry a [`DependencySpecContainer`]: an
//! ordered, append-only list of [`DependencySpec`] values. The container is
//! a declaration surface only. Nothing here resolves, de-duplicates or
//! checks declarations for conflicts; that is the dependency resolver's job.

mod container;
mod types;

pub use container::*;
pub use types::*;
