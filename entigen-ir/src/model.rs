//! Entity metadata model.
//!
//! These types are produced once per run by the metadata source (the
//! manifest loader, or a caller building them directly) and are treated as
//! immutable inputs by synthesis.

use entigen_core::SystemType;

/// Metadata description of one generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Target namespace.
    pub namespace: String,
    /// Raw class name (before sanitization).
    pub class_name: String,
    /// Optional base class the generated class inherits from.
    pub base_class: Option<String>,
    /// Source table name (documentation only).
    pub table_name: String,
    /// Scalar properties in declaration order.
    pub properties: Vec<Property>,
    /// Navigation relationships, in no particular order.
    pub relationships: Vec<Relationship>,
}

impl Entity {
    /// Create an entity with no members. The table name defaults to the class name.
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        Self {
            namespace: namespace.into(),
            table_name: class_name.clone(),
            class_name,
            base_class: None,
            properties: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Set the source table name.
    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Set the base class.
    pub fn base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = Some(base_class.into());
        self
    }

    /// Add a scalar property.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a relationship.
    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// A reference to this entity, for use as a relationship target.
    pub fn reference(&self) -> EntityRef {
        EntityRef::new(&self.namespace, &self.class_name)
    }
}

/// One scalar column mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (before sanitization).
    pub name: String,
    /// Source column name (documentation only).
    pub column_name: String,
    /// Logical storage type.
    pub system_type: SystemType,
    /// Column nullability; `None` when the source did not say.
    pub is_nullable: Option<bool>,
}

impl Property {
    /// Create a property whose column has the same name and unknown nullability.
    pub fn new(name: impl Into<String>, system_type: SystemType) -> Self {
        let name = name.into();
        Self {
            column_name: name.clone(),
            name,
            system_type,
            is_nullable: None,
        }
    }

    /// Set the source column name.
    pub fn column(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    /// Set the column nullability.
    pub fn nullable(mut self, is_nullable: bool) -> Self {
        self.is_nullable = Some(is_nullable);
        self
    }
}

/// Multiplicity of the related side of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Optional single reference.
    ZeroOrOne,
    /// Required single reference.
    One,
    /// Collection.
    Many,
}

impl Cardinality {
    /// Returns true for the collection side.
    pub fn is_many(&self) -> bool {
        matches!(self, Cardinality::Many)
    }

    /// Get the manifest spelling of this cardinality.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::ZeroOrOne => "zero_or_one",
            Cardinality::One => "one",
            Cardinality::Many => "many",
        }
    }
}

/// Non-owning reference to another entity, by namespace and raw class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub namespace: String,
    pub class_name: String,
}

impl EntityRef {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
        }
    }
}

/// One navigation association to another entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Navigation member name (before sanitization).
    pub property_name: String,
    /// Multiplicity of the related side.
    pub cardinality: Cardinality,
    /// The related (principal) entity.
    pub primary_entity: EntityRef,
    /// Names of the foreign-key properties backing this relationship.
    pub properties: Vec<String>,
}

impl Relationship {
    pub fn new(
        property_name: impl Into<String>,
        cardinality: Cardinality,
        primary_entity: EntityRef,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            cardinality,
            primary_entity,
            properties: Vec::new(),
        }
    }

    /// Add a foreign-key property name.
    pub fn foreign_key(mut self, property_name: impl Into<String>) -> Self {
        self.properties.push(property_name.into());
        self
    }
}
