//! Utility modules: constants, configuration, error types, and text helpers.

pub mod config;
pub mod constants;
pub mod error;
pub mod text;
