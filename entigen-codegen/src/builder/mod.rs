//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Line-oriented builder for indented code
//! - [`IndentGuard`] - Scoped indentation that is released on drop
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::{CodeBuilder, IndentGuard};
pub use indent::Indent;
