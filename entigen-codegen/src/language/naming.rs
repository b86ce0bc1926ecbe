//! Identifier sanitization rules for target languages.

/// Whether `c` may start an identifier: a letter or `_`.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Whether `c` may continue an identifier: a letter, an ASCII decimal digit or `_`.
///
/// Other numeric characters such as `²` and `½` are not decimal digits
/// and are replaced.
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Language-specific identifier rules.
///
/// Turns arbitrary strings (table, column and relationship names) into
/// identifiers the target language accepts, without hashing or renaming:
/// illegal characters are replaced, a leading digit is prefixed and reserved
/// words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Prefix that turns a reserved word into a usable identifier (e.g. `@` in C#)
    pub escape_prefix: &'static str,
    /// Replacement for characters that cannot appear in an identifier
    pub replacement: char,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Map a raw name to a valid identifier.
    ///
    /// Deterministic and idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
    pub fn sanitize(&self, raw: &str) -> String {
        // Already-escaped reserved words pass through unchanged.
        if let Some(word) = raw.strip_prefix(self.escape_prefix)
            && self.is_reserved(word)
        {
            return raw.to_string();
        }

        let mut name: String = raw
            .trim()
            .chars()
            .map(|c| {
                if is_identifier_part(c) {
                    c
                } else {
                    self.replacement
                }
            })
            .collect();

        if name.is_empty() {
            return self.replacement.to_string();
        }

        if !name.starts_with(is_identifier_start) {
            name.insert(0, self.replacement);
        }

        if self.is_reserved(&name) {
            return format!("{}{}", self.escape_prefix, name);
        }

        name
    }

    /// Sanitize each segment of a dotted name (e.g. a namespace-qualified base class).
    pub fn sanitize_qualified(&self, raw: &str) -> String {
        raw.split('.')
            .map(|segment| self.sanitize(segment))
            .collect::<Vec<_>>()
            .join(".")
    }
}
