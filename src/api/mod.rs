//! Provides clients for the external services the CLI talks to.
//!
//! Includes:
//! - `registry`: Fetches the component registry document.
//! - `npm`: Looks up latest published versions on the npm registry.

mod npm;
mod registry;

pub use npm::*;
pub use registry::*;
