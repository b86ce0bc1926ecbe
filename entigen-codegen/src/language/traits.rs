//! Language-agnostic code generation traits.

use std::path::Path;

use entigen_core::SystemType;
use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating entity classes in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs")
    fn file_extension(&self) -> &'static str;

    /// Render every file without writing to disk.
    ///
    /// Fails if any entity fails to synthesize; no partial output is returned.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Files that already existed and were left untouched
    pub skipped: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Printed form of a member type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedType {
    /// Type expression, including the nullable marker when present.
    pub printed: String,
    /// The declaration needs a not-null-asserted default initializer.
    pub needs_non_null_default: bool,
}

impl ProjectedType {
    /// A plain type with no default initializer.
    pub fn plain(printed: impl Into<String>) -> Self {
        Self {
            printed: printed.into(),
            needs_non_null_default: false,
        }
    }
}

/// Trait for mapping storage types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a storage type to its printed form, or `None` if it cannot be expressed.
    fn map_system_type(&self, ty: &SystemType) -> Option<String>;

    /// Mark a type as nullable (e.g. `int?` in C#).
    fn map_nullable(&self, inner: &str) -> String {
        format!("{}?", inner)
    }

    /// Collection interface used for to-many navigation members.
    fn map_collection(&self, element: &str) -> String;

    /// Concrete, duplicate-free collection used to initialize to-many members.
    fn map_collection_init(&self, element: &str) -> String;

    /// Project a property type under the given nullability rules.
    ///
    /// | nullable      | value type | nullable mode | result                  |
    /// |---------------|------------|---------------|-------------------------|
    /// | true          | any        | any           | marker                  |
    /// | false/unknown | value      | any           | plain                   |
    /// | false/unknown | reference  | on            | plain + non-null default |
    /// | false/unknown | reference  | off           | plain                   |
    fn project(
        &self,
        ty: &SystemType,
        is_nullable: Option<bool>,
        nullable_mode: bool,
    ) -> Option<ProjectedType> {
        let base = self.map_system_type(ty)?;

        let projected = if is_nullable == Some(true) {
            ProjectedType::plain(self.map_nullable(&base))
        } else if nullable_mode && !ty.is_value_type() {
            ProjectedType {
                printed: base,
                needs_non_null_default: true,
            }
        } else {
            ProjectedType::plain(base)
        };

        Some(projected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainMapper;

    impl TypeMapper for PlainMapper {
        fn language(&self) -> &'static str {
            "plain"
        }

        fn map_system_type(&self, ty: &SystemType) -> Option<String> {
            Some(ty.clr_name().to_string())
        }

        fn map_collection(&self, element: &str) -> String {
            format!("List<{}>", element)
        }

        fn map_collection_init(&self, element: &str) -> String {
            format!("Set<{}>", element)
        }
    }

    #[test]
    fn test_nullable_always_marked() {
        for mode in [true, false] {
            let p = PlainMapper
                .project(&SystemType::Int32, Some(true), mode)
                .unwrap();
            assert_eq!(p, ProjectedType::plain("System.Int32?"));

            let p = PlainMapper
                .project(&SystemType::String, Some(true), mode)
                .unwrap();
            assert_eq!(p, ProjectedType::plain("System.String?"));
        }
    }

    #[test]
    fn test_value_type_never_defaulted() {
        for nullable in [Some(false), None] {
            for mode in [true, false] {
                let p = PlainMapper
                    .project(&SystemType::Decimal, nullable, mode)
                    .unwrap();
                assert_eq!(p, ProjectedType::plain("System.Decimal"));
            }
        }
    }

    #[test]
    fn test_reference_type_defaulted_in_nullable_mode() {
        for nullable in [Some(false), None] {
            let on = PlainMapper
                .project(&SystemType::String, nullable, true)
                .unwrap();
            assert_eq!(on.printed, "System.String");
            assert!(on.needs_non_null_default);

            let off = PlainMapper
                .project(&SystemType::String, nullable, false)
                .unwrap();
            assert_eq!(off, ProjectedType::plain("System.String"));
        }
    }
}
