//! Manifest types and parsing for entigen.toml files.

mod convert;
mod deserialize;
mod file;
mod parse;

use entigen_ir::{Cardinality, SystemType};
pub use file::EntigenToml;
use serde::Deserialize;
use toml::Spanned;

/// Root manifest for entigen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide settings
    pub project: ProjectConfig,

    /// Defaults shared by every entity
    #[serde(default)]
    pub entity: EntityDefaults,

    /// Entity declarations, in output order
    #[serde(default)]
    pub entities: Vec<EntityDef>,
}

/// `[project]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Default namespace of generated classes
    pub namespace: Spanned<String>,

    #[serde(default)]
    pub file_scoped_namespace: bool,

    /// Target compiles with nullable reference types enabled
    #[serde(default)]
    pub nullable: bool,
}

/// `[entity]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDefaults {
    /// Emit XML documentation comments
    #[serde(default)]
    pub document: bool,

    /// Base class used by entities that do not name their own
    pub base_class: Option<String>,

    /// Output subdirectory for generated files
    pub directory: Option<String>,
}

/// One `[[entities]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDef {
    pub class: Spanned<String>,

    /// Source table; defaults to the class name
    pub table: Option<String>,

    /// Overrides `project.namespace`
    pub namespace: Option<String>,

    /// Overrides `entity.base_class`
    pub base_class: Option<String>,

    #[serde(default)]
    pub properties: Vec<PropertyDef>,

    #[serde(default)]
    pub relationships: Vec<RelationshipDef>,
}

/// One `[[entities.properties]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDef {
    /// Property name; defaults to the PascalCase column name
    pub name: Option<String>,

    pub column: String,

    #[serde(rename = "type", deserialize_with = "deserialize::system_type")]
    pub ty: SystemType,

    /// Column nullability; omitted means unknown
    pub nullable: Option<bool>,
}

impl PropertyDef {
    /// Property name, derived from the column when not given.
    pub fn property_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => entigen_core::to_pascal_case(&self.column),
        }
    }
}

/// One `[[entities.relationships]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationshipDef {
    /// Navigation member name
    pub name: String,

    #[serde(deserialize_with = "deserialize::cardinality")]
    pub cardinality: Cardinality,

    /// Class of the related entity
    pub entity: Spanned<String>,

    /// Foreign-key property names
    #[serde(default)]
    pub properties: Vec<String>,
}

/// How a property type is written in the manifest.
///
/// ```toml
/// type = "decimal"                                   # alias
/// type = "System.Guid"                               # CLR name
/// type = { name = "Shop.Status", value_type = true } # custom type
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Name(String),
    Named {
        name: String,
        #[serde(default)]
        value_type: bool,
    },
}
