//! Customer bulk import CLI.
//!
//! The binary is a thin wrapper over this library so the command functions
//! can be exercised directly in integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
