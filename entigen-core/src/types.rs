//! Storage-level type descriptors.

use std::{fmt, str::FromStr};

/// Logical type of a table-backed property.
///
/// This is a language-agnostic representation of the CLR type a column maps
/// to. Use a `TypeMapper` to convert it to a printed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SystemType {
    Boolean,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    Char,
    String,
    ByteArray,
    DateTime,
    DateTimeOffset,
    DateOnly,
    TimeOnly,
    TimeSpan,
    Guid,
    Object,
    /// A user-defined type (enum, struct or class) referenced by full name.
    Named { name: String, value_type: bool },
}

/// Fixed table of built-in types: variant, CLR name, C#-style alias.
const BUILTINS: &[(SystemType, &str, &str)] = &[
    (SystemType::Boolean, "System.Boolean", "bool"),
    (SystemType::Byte, "System.Byte", "byte"),
    (SystemType::SByte, "System.SByte", "sbyte"),
    (SystemType::Int16, "System.Int16", "short"),
    (SystemType::UInt16, "System.UInt16", "ushort"),
    (SystemType::Int32, "System.Int32", "int"),
    (SystemType::UInt32, "System.UInt32", "uint"),
    (SystemType::Int64, "System.Int64", "long"),
    (SystemType::UInt64, "System.UInt64", "ulong"),
    (SystemType::Single, "System.Single", "float"),
    (SystemType::Double, "System.Double", "double"),
    (SystemType::Decimal, "System.Decimal", "decimal"),
    (SystemType::Char, "System.Char", "char"),
    (SystemType::String, "System.String", "string"),
    (SystemType::ByteArray, "System.Byte[]", "byte[]"),
    (SystemType::DateTime, "System.DateTime", "datetime"),
    (SystemType::DateTimeOffset, "System.DateTimeOffset", "datetimeoffset"),
    (SystemType::DateOnly, "System.DateOnly", "dateonly"),
    (SystemType::TimeOnly, "System.TimeOnly", "timeonly"),
    (SystemType::TimeSpan, "System.TimeSpan", "timespan"),
    (SystemType::Guid, "System.Guid", "guid"),
    (SystemType::Object, "System.Object", "object"),
];

impl SystemType {
    /// Create a user-defined named type.
    pub fn named(name: impl Into<String>, value_type: bool) -> Self {
        Self::Named {
            name: name.into(),
            value_type,
        }
    }

    /// Whether instances of this type are values rather than references.
    pub fn is_value_type(&self) -> bool {
        match self {
            SystemType::String | SystemType::ByteArray | SystemType::Object => false,
            SystemType::Named { value_type, .. } => *value_type,
            _ => true,
        }
    }

    /// Get the fully-qualified CLR name (e.g. `System.Int32`).
    pub fn clr_name(&self) -> &str {
        if let SystemType::Named { name, .. } = self {
            return name;
        }
        BUILTINS
            .iter()
            .find(|(ty, _, _)| ty == self)
            .map(|(_, clr, _)| *clr)
            .unwrap_or("System.Object")
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.clr_name())
    }
}

/// Error returned when a type name matches no built-in type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSystemTypeError(pub String);

impl fmt::Display for ParseSystemTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type '{}'", self.0)
    }
}

impl std::error::Error for ParseSystemTypeError {}

impl FromStr for SystemType {
    type Err = ParseSystemTypeError;

    /// Parse a built-in type from its alias (`int`), CLR name (`System.Int32`)
    /// or short CLR name (`Int32`). Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        BUILTINS
            .iter()
            .find(|(_, clr, alias)| {
                let clr = clr.to_lowercase();
                needle == *alias
                    || needle == clr
                    || clr.strip_prefix("system.") == Some(needle.as_str())
            })
            .map(|(ty, _, _)| ty.clone())
            .ok_or_else(|| ParseSystemTypeError(s.to_string()))
    }
}
