//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod compute;
pub mod frequencies;
pub mod interactive;
