//! Field deserializers that resolve manifest spellings into model types.
//!
//! Errors raised here are reported by toml at the offending value's span.

use std::str::FromStr;

use entigen_ir::{Cardinality, SystemType};
use serde::{Deserialize, Deserializer, de::Error};

use super::TypeSpec;

const CARDINALITIES: [Cardinality; 3] = [Cardinality::One, Cardinality::ZeroOrOne, Cardinality::Many];

impl TypeSpec {
    /// Resolve to a storage type.
    pub fn resolve(&self) -> std::result::Result<SystemType, String> {
        match self {
            TypeSpec::Name(name) if name.trim().is_empty() => {
                Err("type name cannot be empty".to_string())
            }
            TypeSpec::Name(name) => SystemType::from_str(name.trim()).map_err(|e| {
                format!(
                    "{}; declare custom types as {{ name = \"{}\", value_type = false }}",
                    e,
                    name.trim()
                )
            }),
            TypeSpec::Named { name, .. } if name.trim().is_empty() => {
                Err("type name cannot be empty".to_string())
            }
            TypeSpec::Named { name, value_type } => Ok(SystemType::named(name.trim(), *value_type)),
        }
    }
}

pub(super) fn system_type<'de, D>(deserializer: D) -> std::result::Result<SystemType, D::Error>
where
    D: Deserializer<'de>,
{
    TypeSpec::deserialize(deserializer)?
        .resolve()
        .map_err(D::Error::custom)
}

pub(super) fn cardinality<'de, D>(deserializer: D) -> std::result::Result<Cardinality, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    CARDINALITIES
        .into_iter()
        .find(|c| c.as_str() == name)
        .ok_or_else(|| {
            D::Error::custom(format!(
                "unknown cardinality '{}', expected one of: one, zero_or_one, many",
                name
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aliases_and_clr_names() {
        assert_eq!(
            TypeSpec::Name("decimal".into()).resolve(),
            Ok(SystemType::Decimal)
        );
        assert_eq!(
            TypeSpec::Name("System.Guid".into()).resolve(),
            Ok(SystemType::Guid)
        );
    }

    #[test]
    fn test_resolve_named() {
        let spec = TypeSpec::Named {
            name: "Shop.Status".into(),
            value_type: true,
        };
        assert_eq!(spec.resolve(), Ok(SystemType::named("Shop.Status", true)));
    }

    #[test]
    fn test_resolve_errors() {
        assert_eq!(
            TypeSpec::Name(" ".into()).resolve(),
            Err("type name cannot be empty".to_string())
        );
        let err = TypeSpec::Name("money".into()).resolve().unwrap_err();
        assert!(err.starts_with("unknown type 'money'"));
    }
}
