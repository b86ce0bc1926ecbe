//! Configuration bundle consumed by entity synthesis.

/// Project-wide formatting options.
///
/// Read-only during generation; every entity in a run is synthesized with
/// the same options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Emit XML documentation comments.
    pub document: bool,
    /// Use `namespace X;` instead of a braced namespace block.
    pub file_scoped_namespace: bool,
    /// Target compiles with nullable reference types enabled.
    pub nullable: bool,
}

impl GeneratorOptions {
    /// Enable or disable documentation comments.
    pub fn document(mut self, document: bool) -> Self {
        self.document = document;
        self
    }

    /// Enable or disable file-scoped namespaces.
    pub fn file_scoped_namespace(mut self, file_scoped: bool) -> Self {
        self.file_scoped_namespace = file_scoped;
        self
    }

    /// Enable or disable nullable reference mode.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}
