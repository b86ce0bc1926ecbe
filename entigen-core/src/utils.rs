//! Shared utility functions for code generation.

/// Convert a column-style name to PascalCase.
///
/// Splits on underscores, hyphens and spaces (e.g. "order_item" -> "OrderItem").
/// Existing capitals inside a word are kept.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
