//! Configuration buckets and their naming registry.
//!
//! A bucket is a named, role-scoped holder of dependency declarations. Its
//! two flags decide what the dependency resolver may do with it:
//!
//! - **consumable**: other components may pull artifacts out of it
//! - **resolvable**: it may be resolved into a concrete file set
//!
//! Declaration buckets such as `implementation` are neither, so declaring a
//! dependency can never trigger resolution on its own. Bucket names share one
//! namespace per build, enforced by [`BucketRegistry`].

mod registry;
mod types;

pub use registry::*;
pub use types::*;
