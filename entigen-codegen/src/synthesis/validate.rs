//! Precondition checks on an entity before lowering.

use std::collections::HashMap;

use entigen_ir::Entity;

use super::SynthesisError;
use crate::language::NamingConvention;

/// Check that an entity is well-formed for the given naming rules.
///
/// Verifies required names are present and that no two members (scalar
/// properties and navigations together) collide once sanitized.
pub fn validate_entity(entity: &Entity, naming: &NamingConvention) -> Result<(), SynthesisError> {
    if entity.class_name.trim().is_empty() {
        return Err(SynthesisError::MissingClassName {
            namespace: entity.namespace.clone(),
        });
    }

    if entity.namespace.trim().is_empty() {
        return Err(SynthesisError::MissingNamespace {
            entity: entity.class_name.clone(),
        });
    }

    for relationship in &entity.relationships {
        if relationship.primary_entity.class_name.trim().is_empty() {
            return Err(SynthesisError::MissingRelationshipTarget {
                entity: entity.class_name.clone(),
                relationship: relationship.property_name.clone(),
            });
        }
    }

    let class_name = naming.sanitize(&entity.class_name);
    let raw_members = entity
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .chain(entity.relationships.iter().map(|r| r.property_name.as_str()));

    let mut seen: HashMap<String, &str> = HashMap::new();
    for raw in raw_members {
        let name = naming.sanitize(raw);

        if name == class_name {
            return Err(SynthesisError::MemberNamedAsClass {
                entity: entity.class_name.clone(),
                name,
            });
        }

        if let Some(first) = seen.get(&name) {
            return Err(SynthesisError::DuplicateIdentifier {
                entity: entity.class_name.clone(),
                name,
                first: first.to_string(),
                second: raw.to_string(),
            });
        }
        seen.insert(name, raw);
    }

    Ok(())
}

/// Check that no two entities generate the same class.
///
/// Classes are compared by sanitized namespace and class name, so raw names
/// that differ only in characters the naming rules replace still collide.
pub fn validate_entities<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    naming: &NamingConvention,
) -> Result<(), SynthesisError> {
    let mut seen: HashMap<(String, String), &str> = HashMap::new();
    for entity in entities {
        let key = (
            naming.sanitize_qualified(&entity.namespace),
            naming.sanitize(&entity.class_name),
        );
        if let Some(first) = seen.get(&key) {
            let (namespace, class) = key;
            return Err(SynthesisError::DuplicateClass {
                namespace,
                class,
                first: first.to_string(),
                second: entity.class_name.clone(),
            });
        }
        seen.insert(key, &entity.class_name);
    }
    Ok(())
}
