//! Core utilities and types for the entigen entity class generator.
//!
//! This crate provides fundamental types and utilities used across
//! the entigen workspace.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Fundamental types
pub use types::{ParseSystemTypeError, SystemType};
// String utilities
pub use utils::to_pascal_case;
