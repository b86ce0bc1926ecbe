//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use entigen_codegen_csharp::CSHARP_NAMING;

use super::Manifest;
use crate::{Error, ParseContext, Result};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "entigen.toml")
    }
}

impl Manifest {
    /// Parse an entigen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an entigen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = ParseContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    tracing::debug!(
        filename,
        entities = manifest.entities.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

/// Cross-table checks that serde cannot express.
fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    let namespace = &manifest.project.namespace;
    if namespace.get_ref().trim().is_empty() {
        return Err(ctx.validation_error_at("namespace cannot be empty", namespace.span()));
    }

    let mut classes = HashMap::new();
    // Generated file names, compared case-insensitively.
    let mut generated = HashMap::new();
    for entity in &manifest.entities {
        let class = &entity.class;
        if class.get_ref().trim().is_empty() {
            return Err(ctx.validation_error_at("class cannot be empty", class.span()));
        }
        if let Some(first) = classes.insert(class.get_ref().as_str(), class.span()) {
            return Err(ctx.duplicate_entity_error(class.get_ref(), first, class.span()));
        }
        let sanitized = CSHARP_NAMING.sanitize(class.get_ref());
        if let Some(first) =
            generated.insert(sanitized.to_lowercase(), (class.get_ref().as_str(), class.span()))
        {
            return Err(ctx.class_collision_error(
                &sanitized,
                first,
                (class.get_ref(), class.span()),
            ));
        }
    }

    for entity in &manifest.entities {
        for relationship in &entity.relationships {
            let target = &relationship.entity;
            if !classes.contains_key(target.get_ref().as_str()) {
                return Err(ctx.unknown_entity_error(
                    &relationship.name,
                    target.get_ref(),
                    target.span(),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Manifest> {
        content.parse()
    }

    fn parse_error_message(content: &str) -> String {
        let err = parse(content).unwrap_err();
        match *err {
            Error::Parse { source, .. } => source.message().to_string(),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    const SHOP: &str = r#"
        [project]
        namespace = "Shop.Data"
        nullable = true

        [entity]
        document = true
        directory = "Entities"

        [[entities]]
        class = "Order"
        table = "dbo.Order"

        [[entities.properties]]
        column = "total_amount"
        type = "decimal"
        nullable = false

        [[entities.properties]]
        name = "Status"
        column = "status"
        type = { name = "Shop.Data.OrderStatus", value_type = true }

        [[entities.relationships]]
        name = "Items"
        cardinality = "many"
        entity = "OrderItem"

        [[entities]]
        class = "OrderItem"
        namespace = "Shop.Data.Lines"

        [[entities.relationships]]
        name = "Order"
        cardinality = "one"
        entity = "Order"
        properties = ["OrderId"]
    "#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = parse(SHOP).unwrap();

        assert_eq!(manifest.project.namespace.get_ref(), "Shop.Data");
        assert!(manifest.project.nullable);
        assert!(!manifest.project.file_scoped_namespace);
        assert!(manifest.entity.document);
        assert_eq!(manifest.entities.len(), 2);
        assert_eq!(manifest.entities[0].properties[0].property_name(), "TotalAmount");
        assert_eq!(manifest.entities[0].properties[0].nullable, Some(false));
        assert_eq!(manifest.entities[0].properties[1].nullable, None);
    }

    #[test]
    fn test_minimal_manifest() {
        let manifest = parse("[project]\nnamespace = \"Shop\"\n").unwrap();
        assert!(manifest.entities.is_empty());
        assert!(!manifest.entity.document);
    }

    #[test]
    fn test_duplicate_entity() {
        let content = r#"
            [project]
            namespace = "Shop"

            [[entities]]
            class = "Order"

            [[entities]]
            class = "Order"
        "#;
        let err = parse(content).unwrap_err();
        match *err {
            Error::DuplicateEntity {
                class,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(class, "Order");
                assert!(first_span.offset() < second_span.offset());
            }
            other => panic!("expected duplicate entity, got {:?}", other),
        }
    }

    #[test]
    fn test_classes_colliding_after_sanitization() {
        let content = r#"
            [project]
            namespace = "Shop"

            [[entities]]
            class = "Order Item"

            [[entities]]
            class = "Order-Item"
        "#;
        let err = parse(content).unwrap_err();
        match *err {
            Error::ClassCollision {
                first,
                second,
                generated,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(first, "Order Item");
                assert_eq!(second, "Order-Item");
                assert_eq!(generated, "Order_Item");
                assert!(first_span.offset() < second_span.offset());
            }
            other => panic!("expected class collision, got {:?}", other),
        }
    }

    #[test]
    fn test_classes_differing_only_in_case() {
        let content = r#"
            [project]
            namespace = "Shop"

            [[entities]]
            class = "Order"

            [[entities]]
            class = "order"
        "#;
        let err = parse(content).unwrap_err();
        assert!(matches!(*err, Error::ClassCollision { .. }));
    }

    #[test]
    fn test_unknown_relationship_target() {
        let content = r#"
            [project]
            namespace = "Shop"

            [[entities]]
            class = "Order"

            [[entities.relationships]]
            name = "Customer"
            cardinality = "one"
            entity = "Customer"
        "#;
        let err = parse(content).unwrap_err();
        match *err {
            Error::UnknownEntity {
                relationship,
                target,
                span,
                ..
            } => {
                assert_eq!(relationship, "Customer");
                assert_eq!(target, "Customer");
                let labelled = &content[span.offset()..span.offset() + span.len()];
                assert!(labelled.contains("Customer"));
            }
            other => panic!("expected unknown entity, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_cardinality() {
        let message = parse_error_message(
            r#"
            [project]
            namespace = "Shop"

            [[entities]]
            class = "Order"

            [[entities.relationships]]
            name = "Items"
            cardinality = "several"
            entity = "Order"
            "#,
        );
        assert!(message.contains("unknown cardinality 'several'"));
    }

    #[test]
    fn test_empty_type_name() {
        let message = parse_error_message(
            r#"
            [project]
            namespace = "Shop"

            [[entities]]
            class = "Order"

            [[entities.properties]]
            column = "total"
            type = ""
            "#,
        );
        assert!(message.contains("type name cannot be empty"));
    }

    #[test]
    fn test_unknown_type_name() {
        let message = parse_error_message(
            r#"
            [project]
            namespace = "Shop"

            [[entities]]
            class = "Order"

            [[entities.properties]]
            column = "total"
            type = "money"
            "#,
        );
        assert!(message.contains("unknown type 'money'"));
    }

    #[test]
    fn test_empty_class() {
        let err = parse("[project]\nnamespace = \"Shop\"\n[[entities]]\nclass = \" \"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { ref message, .. } if message == "class cannot be empty"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        parse_error_message("[project]\nnamespace = \"Shop\"\nlanguage = \"csharp\"\n");
    }
}
