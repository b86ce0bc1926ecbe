//! Source-aware validation context.

use std::ops::Range;

use miette::{NamedSource, SourceSpan};

use crate::Error;

/// Source content and filename carried through validation so errors can
/// point back into the manifest.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "entigen.toml");
/// return Err(ctx.validation_error_at("class cannot be empty", span));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error pointing at a span.
    pub fn validation_error_at(&self, message: impl Into<String>, span: Range<usize>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    pub fn duplicate_entity_error(
        &self,
        class: &str,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateEntity {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            class: class.to_string(),
        })
    }

    pub fn class_collision_error(
        &self,
        generated: &str,
        first: (&str, Range<usize>),
        second: (&str, Range<usize>),
    ) -> Box<Error> {
        Box::new(Error::ClassCollision {
            src: self.named_source(),
            first_span: first.1.into(),
            second_span: second.1.into(),
            first: first.0.to_string(),
            second: second.0.to_string(),
            generated: generated.to_string(),
        })
    }

    pub fn unknown_entity_error(
        &self,
        relationship: &str,
        target: &str,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::UnknownEntity {
            src: self.named_source(),
            span: span.into(),
            relationship: relationship.to_string(),
            target: target.to_string(),
        })
    }
}
