//! EventLens library crate.
//!
//! Re-exports the core modules so that integration tests and other front
//! ends can access them. The command-line entry point is in `main.rs`.

pub mod core;
pub mod export;
pub mod store;
pub mod ui;
pub mod util;
