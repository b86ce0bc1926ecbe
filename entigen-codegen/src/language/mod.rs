//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Projection of storage types to printed type expressions
//! - [`NamingConvention`] - Identifier sanitization rules
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::{NamingConvention, is_identifier_part, is_identifier_start};
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, ProjectedType, TypeMapper};
