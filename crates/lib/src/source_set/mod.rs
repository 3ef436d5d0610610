//! Language source sets.
//!
//! A [`LanguageSourceSet`] is one named group of inputs of one
//! [`LanguageKind`] belonging to a component: its directories, whether it is
//! generated by an upstream task, and its own dependency declarations.

mod kind;
mod types;

pub use kind::*;
pub use types::*;
