//! Subcommands of the `portal` binary.

pub mod config;
pub mod error;
pub mod sqon;
