//! Shared code generation utilities for the entigen entity class generator.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific generators (e.g., `entigen-codegen-csharp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, Indent, IndentGuard)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, NamingConvention)
//! - [`synthesis`] - Entity validation and lowering to the class IR

pub mod builder;
pub mod language;
pub mod synthesis;

pub use builder::{CodeBuilder, Indent, IndentGuard};
pub use language::{
    GenerateResult, LanguageCodegen, NamingConvention, PreviewFile, ProjectedType, TypeMapper,
    is_identifier_part, is_identifier_start,
};
pub use synthesis::{SynthesisError, lower_entity, validate_entities};
