//! C# identifier rules.

use entigen_codegen::NamingConvention;

/// C# naming conventions: reserved keywords are escaped with `@`.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ],
    escape_prefix: "@",
    replacement: '_',
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csharp_reserved_words() {
        assert!(CSHARP_NAMING.is_reserved("class"));
        assert!(CSHARP_NAMING.is_reserved("event"));
        assert!(CSHARP_NAMING.is_reserved("string"));
        // Contextual keywords are valid identifiers.
        assert!(!CSHARP_NAMING.is_reserved("value"));
        assert!(!CSHARP_NAMING.is_reserved("var"));
        // Keywords are case-sensitive.
        assert!(!CSHARP_NAMING.is_reserved("Class"));
    }

    #[test]
    fn test_csharp_sanitize() {
        assert_eq!(CSHARP_NAMING.sanitize("Order"), "Order");
        assert_eq!(CSHARP_NAMING.sanitize("event"), "@event");
        assert_eq!(CSHARP_NAMING.sanitize("1stLine"), "_1stLine");
        assert_eq!(CSHARP_NAMING.sanitize("Unit Price"), "Unit_Price");
        assert_eq!(CSHARP_NAMING.sanitize("Order#"), "Order_");
        assert_eq!(CSHARP_NAMING.sanitize("x²"), "x_");
        assert_eq!(CSHARP_NAMING.sanitize("½"), "_");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let corpus = [
            "class", "@class", "namespace", "Order", "OrderItem", "_Id", "2fa", "42", "Unit Price",
            "unit-price", "e-mail@home", "", "   ", "@", "@@class", "Straße", "value", "x²", "½",
            "price¾",
        ];

        for raw in corpus {
            let once = CSHARP_NAMING.sanitize(raw);
            assert_eq!(CSHARP_NAMING.sanitize(&once), once, "input: {:?}", raw);
            assert!(once.starts_with(|c: char| c.is_alphabetic() || c == '_' || c == '@'));
            assert!(
                once.trim_start_matches('@')
                    .chars()
                    .all(|c| c.is_alphabetic() || c.is_ascii_digit() || c == '_'),
                "input: {:?}",
                raw
            );
        }
    }
}
