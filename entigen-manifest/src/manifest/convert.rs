//! Conversion of a validated manifest into the entity model.

use std::collections::HashMap;

use entigen_ir::{Entity, EntityRef, GeneratorOptions, Property, Relationship};

use super::{EntityDef, Manifest};

impl Manifest {
    /// Generator options from `[project]` and `[entity]`.
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions::default()
            .document(self.entity.document)
            .file_scoped_namespace(self.project.file_scoped_namespace)
            .nullable(self.project.nullable)
    }

    /// Output subdirectory for generated files, if any.
    pub fn directory(&self) -> Option<&str> {
        self.entity.directory.as_deref()
    }

    /// Namespace an entity is generated into.
    pub fn namespace_of<'a>(&'a self, entity: &'a EntityDef) -> &'a str {
        entity
            .namespace
            .as_deref()
            .unwrap_or(self.project.namespace.get_ref().as_str())
    }

    /// Build the entity model, in declaration order.
    pub fn entities(&self) -> Vec<Entity> {
        let namespaces: HashMap<&str, &str> = self
            .entities
            .iter()
            .map(|def| (def.class.get_ref().as_str(), self.namespace_of(def)))
            .collect();

        self.entities
            .iter()
            .map(|def| self.entity(def, &namespaces))
            .collect()
    }

    fn entity(&self, def: &EntityDef, namespaces: &HashMap<&str, &str>) -> Entity {
        let class = def.class.get_ref();
        let mut entity = Entity::new(self.namespace_of(def), class);

        if let Some(table) = &def.table {
            entity = entity.table(table);
        }
        if let Some(base) = def.base_class.as_ref().or(self.entity.base_class.as_ref()) {
            entity = entity.base_class(base);
        }

        for property in &def.properties {
            let mut model = Property::new(property.property_name(), property.ty.clone())
                .column(&property.column);
            if let Some(nullable) = property.nullable {
                model = model.nullable(nullable);
            }
            entity = entity.property(model);
        }

        for relationship in &def.relationships {
            let target = relationship.entity.get_ref();
            // Validation guarantees every target is declared.
            let namespace = namespaces
                .get(target.as_str())
                .copied()
                .unwrap_or(self.project.namespace.get_ref().as_str());
            let model = relationship.properties.iter().fold(
                Relationship::new(
                    &relationship.name,
                    relationship.cardinality,
                    EntityRef::new(namespace, target),
                ),
                |model, fk| model.foreign_key(fk),
            );
            entity = entity.relationship(model);
        }

        entity
    }
}

#[cfg(test)]
mod tests {
    use entigen_ir::{Cardinality, SystemType};

    use crate::Manifest;

    const CONTENT: &str = r#"
        [project]
        namespace = "Shop.Data"
        file_scoped_namespace = true

        [entity]
        base_class = "EntityBase"

        [[entities]]
        class = "Order"
        table = "dbo.Order"

        [[entities.properties]]
        column = "id"
        type = "int"
        nullable = false

        [[entities.relationships]]
        name = "Lines"
        cardinality = "many"
        entity = "OrderLine"

        [[entities]]
        class = "OrderLine"
        namespace = "Shop.Data.Lines"
        base_class = ""

        [[entities.relationships]]
        name = "Order"
        cardinality = "zero_or_one"
        entity = "Order"
        properties = ["OrderId"]
    "#;

    #[test]
    fn test_options() {
        let manifest: Manifest = CONTENT.parse().unwrap();
        let options = manifest.options();
        assert!(options.file_scoped_namespace);
        assert!(!options.nullable);
        assert!(!options.document);
        assert_eq!(manifest.directory(), None);
    }

    #[test]
    fn test_entities() {
        let manifest: Manifest = CONTENT.parse().unwrap();
        let entities = manifest.entities();

        let order = &entities[0];
        assert_eq!(order.namespace, "Shop.Data");
        assert_eq!(order.table_name, "dbo.Order");
        assert_eq!(order.base_class.as_deref(), Some("EntityBase"));
        assert_eq!(order.properties[0].name, "Id");
        assert_eq!(order.properties[0].column_name, "id");
        assert_eq!(order.properties[0].system_type, SystemType::Int32);
        assert_eq!(order.relationships[0].primary_entity.namespace, "Shop.Data.Lines");

        let line = &entities[1];
        assert_eq!(line.table_name, "OrderLine");
        assert_eq!(line.base_class.as_deref(), Some(""));
        assert_eq!(line.relationships[0].cardinality, Cardinality::ZeroOrOne);
        assert_eq!(line.relationships[0].primary_entity.namespace, "Shop.Data");
        assert_eq!(line.relationships[0].properties, ["OrderId"]);
    }
}
