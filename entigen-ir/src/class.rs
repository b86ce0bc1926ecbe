//! Class Intermediate Representation.
//!
//! A [`ClassIR`] is the fully-decided shape of one generated entity class:
//! identifiers are already sanitized, types already projected, and members
//! already ordered. Each member carries a [`MemberRole`] so that a renderer
//! attaches capability markers (attributes, explicit interface qualification)
//! from the role instead of re-deriving them from the source model.

/// How the namespace wraps the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceStyle {
    /// `namespace X;` with the class at top level.
    FileScoped,
    /// `namespace X { ... }` with the class indented one level.
    Block,
}

/// How the class satisfies the identity contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inheritance {
    /// No inheritance clause; the identity members satisfy the contract structurally.
    NoBase,
    /// Inherits from the given (sanitized) base class and declares the contract nominally.
    WithBase(String),
}

impl Inheritance {
    /// Returns true when an inheritance clause is emitted.
    pub fn has_base(&self) -> bool {
        matches!(self, Inheritance::WithBase(_))
    }
}

/// Role of a generated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    /// Column-backed resource attribute.
    Scalar,
    /// Navigation to a single related entity.
    ToOne,
    /// Navigation to a collection of related entities.
    ToMany,
    /// Explicit adapter member of the identity contract.
    IdentityAdapter(IdentityAccessor),
}

impl MemberRole {
    /// Returns true for navigation members.
    pub fn is_navigation(&self) -> bool {
        matches!(self, MemberRole::ToOne | MemberRole::ToMany)
    }
}

/// The three members of the identity contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityAccessor {
    /// External identifier: reads the key rendered as text.
    StringId,
    /// Local transaction identifier: always absent.
    LocalId,
    /// Typed identifier: reads the integer key.
    Id,
}

impl IdentityAccessor {
    /// All accessors, in emission order.
    pub const ALL: [IdentityAccessor; 3] = [
        IdentityAccessor::StringId,
        IdentityAccessor::LocalId,
        IdentityAccessor::Id,
    ];

    /// Member name on the contract.
    pub fn member_name(&self) -> &'static str {
        match self {
            IdentityAccessor::StringId => "StringId",
            IdentityAccessor::LocalId => "LocalId",
            IdentityAccessor::Id => "Id",
        }
    }
}

/// Documentation attached to the class header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDoc {
    /// Source table name.
    pub table_name: String,
}

/// Documentation attached to a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDoc {
    /// Scalar property backed by a column.
    Column(String),
    /// Navigation member; `target` is the related type, `foreign_keys` are
    /// cross-referenced properties.
    Navigation {
        target: String,
        foreign_keys: Vec<String>,
    },
}

/// One declared member of the class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Sanitized member name.
    pub name: String,
    /// What the member is for.
    pub role: MemberRole,
    /// Printed type, including any nullable marker.
    pub ty: String,
    /// Append a not-null-asserted default initializer.
    pub non_null_default: bool,
    /// Documentation, when documentation is enabled.
    pub doc: Option<MemberDoc>,
}

impl Member {
    pub fn new(name: impl Into<String>, role: MemberRole, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role,
            ty: ty.into(),
            non_null_default: false,
            doc: None,
        }
    }

    /// Request a not-null-asserted default initializer.
    pub fn with_non_null_default(mut self, non_null_default: bool) -> Self {
        self.non_null_default = non_null_default;
        self
    }

    /// Attach documentation.
    pub fn with_doc(mut self, doc: Option<MemberDoc>) -> Self {
        self.doc = doc;
        self
    }
}

/// Constructor statement initializing a collection navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInit {
    /// Sanitized navigation member name.
    pub property: String,
    /// Printed concrete collection type to instantiate.
    pub ty: String,
}

/// Fully-decided entity class, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIR {
    /// Namespace the class lives in.
    pub namespace: String,
    /// Namespace syntax.
    pub namespace_style: NamespaceStyle,
    /// Sanitized class name.
    pub name: String,
    /// Class documentation, when documentation is enabled.
    pub doc: Option<ClassDoc>,
    /// Inheritance branch.
    pub inheritance: Inheritance,
    /// Constructor statements, in emission order.
    pub initializers: Vec<CollectionInit>,
    /// Members in emission order: scalars, navigations, identity adapters.
    pub members: Vec<Member>,
}

impl ClassIR {
    /// Members with the given role predicate, in emission order.
    pub fn members_where(&self, f: impl Fn(&MemberRole) -> bool) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| f(&m.role))
    }

    /// Returns true if documentation comments are emitted.
    pub fn is_documented(&self) -> bool {
        self.doc.is_some()
    }
}
