//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the command surface (parsing and per-command option records), the overview
//! screen shown without a subcommand, and the application that wires the pre-action
//! hook to the bound actions.

mod app;
mod commands;
pub mod help;

pub use app::*;
pub use commands::*;
