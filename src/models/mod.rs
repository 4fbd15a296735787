//! Defines the data structures and models used throughout the application.
//!
//! This includes the component registry document, the session catalog built from it,
//! and the target project's `package.json`.

mod component;
mod package;

pub use component::*;
pub use package::*;

#[cfg(test)]
pub(crate) use component::tests::component as test_component;
