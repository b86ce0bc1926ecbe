//! Entity class rendering.
//!
//! Turns a lowered [`ClassIR`] into C# source for a JSON:API resource class.
//! Each member role maps to one declaration shape:
//!
//! - `Scalar` → `[Attr] public T Name { get; set; }`
//! - `ToOne` → `[HasOne] public virtual T Name { get; set; }`
//! - `ToMany` → `[HasMany] public virtual ICollection<T> Name { get; set; }`
//! - `IdentityAdapter` → explicit `IIdentifiable` implementation
//!
//! Generated sections are wrapped in `#region Generated ...` blocks; the
//! identity region is rewritten on every run.

use entigen_codegen::{CodeBuilder, SynthesisError, lower_entity};
use entigen_ir::{
    ClassIR, Entity, GeneratorOptions, IdentityAccessor, Inheritance, Member, MemberDoc,
    MemberRole, NamespaceStyle,
};

use crate::{CSHARP_NAMING, CSharpTypeMapper};

const ATTR: &str = "JsonApiDotNetCore.Resources.Annotations.Attr";
const HAS_ONE: &str = "JsonApiDotNetCore.Resources.Annotations.HasOne";
const HAS_MANY: &str = "JsonApiDotNetCore.Resources.Annotations.HasMany";
const IDENTIFIABLE: &str = "JsonApiDotNetCore.Resources.IIdentifiable";
const IDENTIFIABLE_INT: &str = "JsonApiDotNetCore.Resources.IIdentifiable<int>";

/// Synthesize the C# source of one entity class.
///
/// Pure function of its inputs: the same entity and options always produce
/// byte-identical text.
pub fn synthesize(entity: &Entity, options: &GeneratorOptions) -> Result<String, SynthesisError> {
    let class = lower_entity(entity, options, &CSHARP_NAMING, &CSharpTypeMapper)?;
    Ok(EntityClassRenderer::new(&class).render())
}

/// Renders a [`ClassIR`] as C# source.
pub struct EntityClassRenderer<'a> {
    class: &'a ClassIR,
}

impl<'a> EntityClassRenderer<'a> {
    pub fn new(class: &'a ClassIR) -> Self {
        Self { class }
    }

    /// Render the complete file contents.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::csharp();
        let namespace = format!("namespace {}", self.class.namespace);

        match self.class.namespace_style {
            NamespaceStyle::FileScoped => {
                builder.push_line(&format!("{};", namespace)).push_blank();
                self.render_class(&mut builder);
            }
            NamespaceStyle::Block => {
                builder.block_with_close(&namespace, "}", |b| self.render_class(b));
            }
        }

        builder.build()
    }

    fn documented(&self) -> bool {
        self.class.is_documented()
    }

    fn render_class(&self, b: &mut CodeBuilder) {
        let name = &self.class.name;

        if let Some(doc) = &self.class.doc {
            b.push_doc("<summary>");
            b.push_doc(&format!(
                "Entity class representing data for table '{}'.",
                xml_escape(&doc.table_name)
            ));
            b.push_doc("</summary>");
        }

        b.push_line(&format!("public partial class {}", name));
        if let Inheritance::WithBase(base) = &self.class.inheritance {
            b.indent_with(|b| {
                b.push_line(&format!(": {}, {}", base, IDENTIFIABLE_INT));
            });
        }

        b.push_line("{");
        {
            let mut body = b.indented();
            self.render_constructor(&mut body);
            body.push_blank();
            self.render_properties(&mut body);
            body.push_blank();
            self.render_relationships(&mut body);
            body.push_blank();
            self.render_identity(&mut body);
        }
        b.push_line("}");
    }

    fn render_constructor(&self, b: &mut CodeBuilder) {
        let name = &self.class.name;

        if self.documented() {
            b.push_doc("<summary>");
            b.push_doc(&format!(
                "Initializes a new instance of the <see cref=\"{}\"/> class.",
                name
            ));
            b.push_doc("</summary>");
        }

        b.block_with_close(&format!("public {}()", name), "}", |b| {
            region(b, "Constructor", |b| {
                for init in &self.class.initializers {
                    b.push_line(&format!("{} = new {}();", init.property, init.ty));
                }
            });
        });
    }

    fn render_properties(&self, b: &mut CodeBuilder) {
        region(b, "Properties", |b| {
            for member in self.class.members_where(|r| *r == MemberRole::Scalar) {
                self.render_member(b, member);
            }
        });
    }

    fn render_relationships(&self, b: &mut CodeBuilder) {
        region(b, "Relationships", |b| {
            for member in self.class.members_where(MemberRole::is_navigation) {
                self.render_member(b, member);
            }
        });
    }

    fn render_member(&self, b: &mut CodeBuilder, member: &Member) {
        let (attribute, modifiers, noun) = match member.role {
            MemberRole::Scalar => (ATTR, "public", "property value"),
            MemberRole::ToOne => (HAS_ONE, "public virtual", "navigation property"),
            MemberRole::ToMany => (HAS_MANY, "public virtual", "navigation collection"),
            MemberRole::IdentityAdapter(_) => return,
        };

        match &member.doc {
            Some(MemberDoc::Column(column)) => {
                let text = format!("The {} representing column '{}'.", noun, xml_escape(column));
                render_summary(b, &text);
            }
            Some(MemberDoc::Navigation {
                target,
                foreign_keys,
            }) => {
                let text = format!("The {} for entity <see cref=\"{}\" />.", noun, target);
                render_summary(b, &text);
                for fk in foreign_keys {
                    b.push_doc(&format!("<seealso cref=\"{}\" />", fk));
                }
            }
            None => {}
        }

        let default = if member.non_null_default {
            " = null!;"
        } else {
            ""
        };
        b.push_line(&format!(
            "[{}] {} {} {} {{ get; set; }}{}",
            attribute, modifiers, member.ty, member.name, default
        ));
    }

    fn render_identity(&self, b: &mut CodeBuilder) {
        region(b, "IIdentifiable Properties", |b| {
            for member in self.class.members.iter() {
                let MemberRole::IdentityAdapter(accessor) = member.role else {
                    continue;
                };

                let (contract, getter) = match accessor {
                    IdentityAccessor::StringId => (IDENTIFIABLE, "Id.ToString()"),
                    IdentityAccessor::LocalId => (IDENTIFIABLE, "null"),
                    IdentityAccessor::Id => (IDENTIFIABLE_INT, "Id"),
                };

                let header = format!("{} {}.{}", member.ty, contract, member.name);
                b.block_with_close(&header, "}", |b| {
                    b.push_line(&format!("get => {};", getter));
                    b.push_line("set { }");
                });
            }
        });
    }
}

/// Emit a `#region Generated <title>` block around `f`.
fn region<F>(b: &mut CodeBuilder, title: &str, f: F)
where
    F: FnOnce(&mut CodeBuilder),
{
    b.push_line(&format!("#region Generated {}", title));
    f(b);
    b.push_line("#endregion");
}

fn render_summary(b: &mut CodeBuilder, text: &str) {
    b.push_doc("<summary>");
    b.push_doc(&format!("Gets or sets the {}", lowercase_first(text)));
    b.push_doc("</summary>");
    b.push_doc("<value>");
    b.push_doc(text);
    b.push_doc("</value>");
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape text for a single `///` line.
///
/// Control characters and the C# line and paragraph separators become
/// spaces so the text cannot end the comment.
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{2028}' | '\u{2029}' => escaped.push(' '),
            c if c.is_control() => escaped.push(' '),
            c => escaped.push(c),
        }
    }
    escaped
}
