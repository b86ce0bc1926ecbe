//! C# type mapper implementation.

use entigen_codegen::{TypeMapper, is_identifier_part, is_identifier_start};
use entigen_core::SystemType;

use crate::CSHARP_NAMING;

/// C# type mapper.
///
/// Built-in types print as their keyword alias where C# has one and as a
/// fully-qualified name otherwise, so generated files need no `using`
/// directives.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpTypeMapper;

impl TypeMapper for CSharpTypeMapper {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn map_system_type(&self, ty: &SystemType) -> Option<String> {
        let printed = match ty {
            SystemType::Boolean => "bool",
            SystemType::Byte => "byte",
            SystemType::SByte => "sbyte",
            SystemType::Int16 => "short",
            SystemType::UInt16 => "ushort",
            SystemType::Int32 => "int",
            SystemType::UInt32 => "uint",
            SystemType::Int64 => "long",
            SystemType::UInt64 => "ulong",
            SystemType::Single => "float",
            SystemType::Double => "double",
            SystemType::Decimal => "decimal",
            SystemType::Char => "char",
            SystemType::String => "string",
            SystemType::ByteArray => "byte[]",
            SystemType::Object => "object",
            SystemType::DateTime => "System.DateTime",
            SystemType::DateTimeOffset => "System.DateTimeOffset",
            SystemType::DateOnly => "System.DateOnly",
            SystemType::TimeOnly => "System.TimeOnly",
            SystemType::TimeSpan => "System.TimeSpan",
            SystemType::Guid => "System.Guid",
            SystemType::Named { name, .. } => {
                return is_type_name(name).then(|| CSHARP_NAMING.sanitize_qualified(name));
            }
        };
        Some(printed.to_string())
    }

    fn map_collection(&self, element: &str) -> String {
        format!("System.Collections.Generic.ICollection<{}>", element)
    }

    fn map_collection_init(&self, element: &str) -> String {
        format!("System.Collections.Generic.HashSet<{}>", element)
    }
}

/// Whether `name` is a (possibly dotted) C# type name without generics.
///
/// Reserved-word segments are accepted here and escaped when printed.
fn is_type_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part)
        })
}

#[cfg(test)]
mod tests {
    use entigen_codegen::ProjectedType;

    use super::*;

    #[test]
    fn test_aliases() {
        let mapper = CSharpTypeMapper;

        assert_eq!(mapper.map_system_type(&SystemType::Int32).unwrap(), "int");
        assert_eq!(mapper.map_system_type(&SystemType::Decimal).unwrap(), "decimal");
        assert_eq!(mapper.map_system_type(&SystemType::String).unwrap(), "string");
        assert_eq!(mapper.map_system_type(&SystemType::ByteArray).unwrap(), "byte[]");
        assert_eq!(
            mapper.map_system_type(&SystemType::Guid).unwrap(),
            "System.Guid"
        );
    }

    #[test]
    fn test_named_types() {
        let mapper = CSharpTypeMapper;

        assert_eq!(
            mapper
                .map_system_type(&SystemType::named("Shop.Data.OrderStatus", true))
                .unwrap(),
            "Shop.Data.OrderStatus"
        );
        assert_eq!(mapper.map_system_type(&SystemType::named("", true)), None);
        assert_eq!(
            mapper.map_system_type(&SystemType::named("Shop..Status", true)),
            None
        );
        assert_eq!(
            mapper.map_system_type(&SystemType::named("List<int>", false)),
            None
        );
        assert_eq!(
            mapper.map_system_type(&SystemType::named("9Lives", false)),
            None
        );
        assert_eq!(
            mapper.map_system_type(&SystemType::named("Shop.Size²", true)),
            None
        );
    }

    #[test]
    fn test_named_type_reserved_segments_escaped() {
        let mapper = CSharpTypeMapper;

        assert_eq!(
            mapper.map_system_type(&SystemType::named("Shop.class", false)),
            Some("Shop.@class".to_string())
        );
        assert_eq!(
            mapper.map_system_type(&SystemType::named("event.Kind", true)),
            Some("@event.Kind".to_string())
        );
    }

    #[test]
    fn test_projection_table() {
        let mapper = CSharpTypeMapper;

        // nullable column, any type, any mode: marker
        assert_eq!(
            mapper.project(&SystemType::Int32, Some(true), false),
            Some(ProjectedType::plain("int?"))
        );
        assert_eq!(
            mapper.project(&SystemType::String, Some(true), true),
            Some(ProjectedType::plain("string?"))
        );

        // non-nullable value type: plain
        assert_eq!(
            mapper.project(&SystemType::Decimal, Some(false), true),
            Some(ProjectedType::plain("decimal"))
        );

        // non-nullable reference type, nullable mode on: default, no marker
        assert_eq!(
            mapper.project(&SystemType::String, Some(false), true),
            Some(ProjectedType {
                printed: "string".into(),
                needs_non_null_default: true,
            })
        );

        // same property, nullable mode off: no marker, no default
        assert_eq!(
            mapper.project(&SystemType::String, Some(false), false),
            Some(ProjectedType::plain("string"))
        );

        // unknown nullability behaves as non-nullable
        assert_eq!(
            mapper.project(&SystemType::ByteArray, None, true),
            Some(ProjectedType {
                printed: "byte[]".into(),
                needs_non_null_default: true,
            })
        );
    }

    #[test]
    fn test_collections() {
        let mapper = CSharpTypeMapper;
        assert_eq!(
            mapper.map_collection("Shop.OrderItem"),
            "System.Collections.Generic.ICollection<Shop.OrderItem>"
        );
        assert_eq!(
            mapper.map_collection_init("Shop.OrderItem"),
            "System.Collections.Generic.HashSet<Shop.OrderItem>"
        );
    }
}
