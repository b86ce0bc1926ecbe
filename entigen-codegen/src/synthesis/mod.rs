//! Entity synthesis: validation and lowering to the class IR.
//!
//! ```text
//! Entity + GeneratorOptions → validate → lower → ClassIR
//! ```
//!
//! Both stages are pure functions of their inputs. A failure is reported for
//! the offending entity only and never yields a partial [`ClassIR`].
//!
//! [`ClassIR`]: entigen_ir::ClassIR

mod error;
mod lower;
mod validate;

pub use error::SynthesisError;
pub use lower::lower_entity;
pub use validate::{validate_entities, validate_entity};
