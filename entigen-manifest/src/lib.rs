// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use manifest::{
    EntigenToml, EntityDef, EntityDefaults, Manifest, ProjectConfig, PropertyDef,
    RelationshipDef, TypeSpec,
};
pub use validate::ParseContext;
