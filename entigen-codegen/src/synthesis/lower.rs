//! Lowering of an entity into the class IR.

use entigen_ir::{
    Cardinality, ClassDoc, ClassIR, CollectionInit, Entity, EntityRef, GeneratorOptions,
    IdentityAccessor, Inheritance, Member, MemberDoc, MemberRole, NamespaceStyle, Relationship,
    SystemType,
};

use super::{SynthesisError, validate_entity};
use crate::language::{NamingConvention, ProjectedType, TypeMapper};

/// Lower an entity into a fully-decided [`ClassIR`].
///
/// Validates the entity first; any precondition violation or unsupported
/// type aborts lowering for this entity.
pub fn lower_entity(
    entity: &Entity,
    options: &GeneratorOptions,
    naming: &NamingConvention,
    mapper: &impl TypeMapper,
) -> Result<ClassIR, SynthesisError> {
    validate_entity(entity, naming)?;

    let lowering = Lowering {
        entity,
        options,
        naming,
        mapper,
    };

    let mut relationships: Vec<&Relationship> = entity.relationships.iter().collect();
    relationships.sort_by(|a, b| a.property_name.cmp(&b.property_name));

    let mut members = lowering.scalar_members()?;
    members.extend(relationships.iter().map(|r| lowering.navigation_member(r)));
    members.extend(lowering.identity_members()?);

    let class = ClassIR {
        namespace: naming.sanitize_qualified(&entity.namespace),
        namespace_style: if options.file_scoped_namespace {
            NamespaceStyle::FileScoped
        } else {
            NamespaceStyle::Block
        },
        name: naming.sanitize(&entity.class_name),
        doc: options.document.then(|| ClassDoc {
            table_name: entity.table_name.clone(),
        }),
        inheritance: lowering.inheritance(),
        initializers: lowering.initializers(&relationships),
        members,
    };

    tracing::debug!(
        language = mapper.language(),
        entity = %class.name,
        members = class.members.len(),
        initializers = class.initializers.len(),
        has_base = class.inheritance.has_base(),
        "lowered entity"
    );

    Ok(class)
}

struct Lowering<'a, M> {
    entity: &'a Entity,
    options: &'a GeneratorOptions,
    naming: &'a NamingConvention,
    mapper: &'a M,
}

impl<M: TypeMapper> Lowering<'_, M> {
    fn inheritance(&self) -> Inheritance {
        match self.entity.base_class.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => {
                Inheritance::WithBase(self.naming.sanitize_qualified(base))
            }
            _ => Inheritance::NoBase,
        }
    }

    /// Fully-qualified type name of a related entity.
    fn target_type(&self, target: &EntityRef) -> String {
        format!(
            "{}.{}",
            self.naming.sanitize_qualified(&target.namespace),
            self.naming.sanitize(&target.class_name)
        )
    }

    /// Constructor statements for to-many navigations, in the given (sorted) order.
    fn initializers(&self, sorted: &[&Relationship]) -> Vec<CollectionInit> {
        sorted
            .iter()
            .filter(|r| r.cardinality.is_many())
            .map(|r| CollectionInit {
                property: self.naming.sanitize(&r.property_name),
                ty: self
                    .mapper
                    .map_collection_init(&self.target_type(&r.primary_entity)),
            })
            .collect()
    }

    fn scalar_members(&self) -> Result<Vec<Member>, SynthesisError> {
        self.entity
            .properties
            .iter()
            .map(|property| -> Result<Member, SynthesisError> {
                let projected = self
                    .mapper
                    .project(
                        &property.system_type,
                        property.is_nullable,
                        self.options.nullable,
                    )
                    .ok_or_else(|| SynthesisError::UnsupportedType {
                        entity: self.entity.class_name.clone(),
                        property: property.name.clone(),
                        ty: property.system_type.to_string(),
                    })?;

                let doc = self
                    .options
                    .document
                    .then(|| MemberDoc::Column(property.column_name.clone()));

                Ok(Member::new(
                    self.naming.sanitize(&property.name),
                    MemberRole::Scalar,
                    projected.printed,
                )
                .with_non_null_default(projected.needs_non_null_default)
                .with_doc(doc))
            })
            .collect()
    }

    fn navigation_member(&self, relationship: &Relationship) -> Member {
        let target = self.target_type(&relationship.primary_entity);
        let name = self.naming.sanitize(&relationship.property_name);

        if relationship.cardinality.is_many() {
            let doc = self.options.document.then(|| MemberDoc::Navigation {
                target: target.clone(),
                foreign_keys: Vec::new(),
            });
            return Member::new(name, MemberRole::ToMany, self.mapper.map_collection(&target))
                .with_doc(doc);
        }

        let projected = self.navigation_type(&target, relationship.cardinality);
        let doc = self.options.document.then(|| MemberDoc::Navigation {
            target,
            foreign_keys: relationship
                .properties
                .iter()
                .map(|fk| self.naming.sanitize(fk))
                .collect(),
        });

        Member::new(name, MemberRole::ToOne, projected.printed)
            .with_non_null_default(projected.needs_non_null_default)
            .with_doc(doc)
    }

    /// Type of a to-one navigation: a required side gets a non-null default,
    /// an optional side gets a nullable marker, and neither applies outside
    /// nullable mode.
    fn navigation_type(&self, target: &str, cardinality: Cardinality) -> ProjectedType {
        if !self.options.nullable {
            return ProjectedType::plain(target);
        }

        match cardinality {
            Cardinality::One => ProjectedType {
                printed: target.to_string(),
                needs_non_null_default: true,
            },
            _ => ProjectedType::plain(self.mapper.map_nullable(target)),
        }
    }

    fn identity_members(&self) -> Result<Vec<Member>, SynthesisError> {
        IdentityAccessor::ALL
            .into_iter()
            .map(|accessor| -> Result<Member, SynthesisError> {
                let ty = match accessor {
                    IdentityAccessor::StringId => self.map_builtin(accessor, &SystemType::String)?,
                    IdentityAccessor::LocalId => {
                        let ty = self.map_builtin(accessor, &SystemType::String)?;
                        if self.options.nullable {
                            self.mapper.map_nullable(&ty)
                        } else {
                            ty
                        }
                    }
                    IdentityAccessor::Id => self.map_builtin(accessor, &SystemType::Int32)?,
                };

                Ok(Member::new(
                    accessor.member_name(),
                    MemberRole::IdentityAdapter(accessor),
                    ty,
                ))
            })
            .collect()
    }

    fn map_builtin(
        &self,
        accessor: IdentityAccessor,
        ty: &SystemType,
    ) -> Result<String, SynthesisError> {
        self.mapper
            .map_system_type(ty)
            .ok_or_else(|| SynthesisError::UnsupportedType {
                entity: self.entity.class_name.clone(),
                property: accessor.member_name().to_string(),
                ty: ty.to_string(),
            })
    }
}
