//! Entity model and intermediate representation types for entigen.
//!
//! This crate provides the type definitions shared across the entigen
//! generation pipeline.
//!
//! # Architecture
//!
//! ```text
//! entigen.toml → entigen-manifest (parsing) → Entity (model) → ClassIR (lowering) → C# text
//! ```
//!
//! The model types describe *what* the database metadata says; the class IR
//! describes *what* gets declared, with every member tagged by its role so a
//! renderer never has to re-derive generation decisions.

mod class;
mod model;
mod options;

pub use class::{
    ClassDoc, ClassIR, CollectionInit, IdentityAccessor, Inheritance, Member, MemberDoc,
    MemberRole, NamespaceStyle,
};
pub use entigen_core::SystemType;
pub use model::{Cardinality, Entity, EntityRef, Property, Relationship};
pub use options::GeneratorOptions;
