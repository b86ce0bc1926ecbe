use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create an entigen.toml or pass its path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse entigen.toml")]
    #[diagnostic(code(entigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("entity class '{class}' is declared twice")]
    #[diagnostic(
        code(entigen::duplicate_entity),
        help("each [[entities]] table must have a unique class")
    )]
    DuplicateEntity {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        class: String,
    },

    #[error("entity classes '{first}' and '{second}' both generate '{generated}'")]
    #[diagnostic(
        code(entigen::class_collision),
        help("class names must stay distinct after invalid characters are replaced")
    )]
    ClassCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("generates '{generated}'")]
        first_span: SourceSpan,
        #[label("also generates '{generated}'")]
        second_span: SourceSpan,
        first: String,
        second: String,
        generated: String,
    },

    #[error("relationship '{relationship}' targets unknown entity '{target}'")]
    #[diagnostic(
        code(entigen::unknown_entity),
        help("declare an [[entities]] table with class = \"{target}\"")
    )]
    UnknownEntity {
        #[source_code]
        src: NamedSource<String>,
        #[label("no entity with this class")]
        span: SourceSpan,
        relationship: String,
        target: String,
    },

    #[error("{message}")]
    #[diagnostic(code(entigen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
