//! Integration tests for the `project` Lua front end.

mod common;
mod components_tests;
mod source_sets_tests;
