use thiserror::Error;

/// Reasons an entity cannot be synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("entity in namespace '{namespace}' has no class name")]
    MissingClassName { namespace: String },

    #[error("entity '{entity}' has no namespace")]
    MissingNamespace { entity: String },

    #[error("relationship '{relationship}' on entity '{entity}' has no target entity")]
    MissingRelationshipTarget {
        entity: String,
        relationship: String,
    },

    #[error("entity '{entity}' declares member '{name}' twice (from '{first}' and '{second}')")]
    DuplicateIdentifier {
        entity: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("entity '{entity}' has a member named '{name}', which is also the class name")]
    MemberNamedAsClass { entity: String, name: String },

    #[error("entities '{first}' and '{second}' both generate class '{namespace}.{class}'")]
    DuplicateClass {
        namespace: String,
        class: String,
        first: String,
        second: String,
    },

    #[error("entities '{first}' and '{second}' both generate file '{path}'")]
    DuplicateOutputPath {
        path: String,
        first: String,
        second: String,
    },

    #[error("entity '{entity}' property '{property}' has unsupported type '{ty}'")]
    UnsupportedType {
        entity: String,
        property: String,
        ty: String,
    },
}

impl SynthesisError {
    /// Raw name of the entity the error belongs to.
    pub fn entity(&self) -> &str {
        match self {
            SynthesisError::MissingClassName { .. } => "",
            SynthesisError::DuplicateClass { second, .. }
            | SynthesisError::DuplicateOutputPath { second, .. } => second,
            SynthesisError::MissingNamespace { entity }
            | SynthesisError::MissingRelationshipTarget { entity, .. }
            | SynthesisError::DuplicateIdentifier { entity, .. }
            | SynthesisError::MemberNamedAsClass { entity, .. }
            | SynthesisError::UnsupportedType { entity, .. } => entity,
        }
    }
}
