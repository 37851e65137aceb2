//! Structured representation of Go field types.
//!
//! Field types are lowered from the syntax tree into [`TypeRef`] values so the
//! generator can render them without touching tree-sitter nodes again.

use tree_sitter::Node;

/// A Go type expression, reduced to the shapes a builder cares about.
///
/// Anything without a dedicated variant (maps, channels, function types, ...)
/// is captured as [`TypeRef::Other`] with its grammar kind, so lowering is
/// total and rendering never panics on unusual input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A plain identifier, e.g. `string` or `Person`.
    Named(String),
    /// A slice or array element type, rendered `[]T`.
    ///
    /// Fixed-size array lengths are dropped; `[4]byte` lowers the same way
    /// as `[]byte`.
    Slice(Box<TypeRef>),
    /// A pointer referent, rendered `*T`.
    Pointer(Box<TypeRef>),
    /// A package-qualified type, rendered `pkg.Name`.
    Qualified {
        /// The package selector (always a [`TypeRef::Named`] in valid Go).
        package: Box<TypeRef>,
        /// The type name inside the package.
        name: String,
    },
    /// Any other type expression, tagged with its grammar kind.
    Other(String),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a slice type reference.
    pub fn slice(element: TypeRef) -> Self {
        Self::Slice(Box::new(element))
    }

    /// Create a pointer type reference.
    pub fn pointer(referent: TypeRef) -> Self {
        Self::Pointer(Box::new(referent))
    }

    /// Create a package-qualified type reference.
    pub fn qualified(package: TypeRef, name: impl Into<String>) -> Self {
        Self::Qualified {
            package: Box::new(package),
            name: name.into(),
        }
    }

    /// Lower a type expression node into a [`TypeRef`].
    pub(crate) fn from_node(node: Node<'_>, source: &str) -> Self {
        match node.kind() {
            "type_identifier" | "package_identifier" => Self::Named(node_text(node, source)),
            "slice_type" | "array_type" => match node.child_by_field_name("element") {
                Some(element) => Self::slice(Self::from_node(element, source)),
                None => Self::Other(node.kind().to_string()),
            },
            "pointer_type" => match referent_of(node) {
                Some(referent) => Self::pointer(Self::from_node(referent, source)),
                None => Self::Other(node.kind().to_string()),
            },
            "qualified_type" => {
                let package = node.child_by_field_name("package");
                let name = node.child_by_field_name("name");
                match (package, name) {
                    (Some(package), Some(name)) => Self::Qualified {
                        package: Box::new(Self::from_node(package, source)),
                        name: node_text(name, source),
                    },
                    _ => Self::Other(node.kind().to_string()),
                }
            }
            kind => Self::Other(kind.to_string()),
        }
    }
}

/// Text of a node, or the empty string when the source slice is not UTF-8.
pub(crate) fn node_text(node: Node<'_>, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .map(str::to_string)
        .unwrap_or_default()
}

/// The referent of a pointer type.
///
/// The Go grammar gives the referent no field name, so take the first named
/// child that is not a comment.
fn referent_of(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
}
