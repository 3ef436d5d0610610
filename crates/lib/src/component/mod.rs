//! Language components.
//!
//! A [`Component`] is the top-level addressable build unit: a C++
//! application, a C++ library or a JVM library. Construction is cheap and
//! eager: every source set, directory collection and bucket the
//! [`ComponentKind`] calls for is created up front, but nothing touches the
//! file system. Directories are resolved, and files materialized, only when
//! a consumer pulls them.

mod kind;
mod types;

pub use kind::*;
pub use types::*;
