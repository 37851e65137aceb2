//! Parsed Go source files.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Result};
use crate::structs::{StructDecl, StructField};

/// One parsed Go source file.
///
/// Owns the raw text and its tree-sitter parse for the duration of a
/// generation run. Struct lookup walks the whole tree, so declarations at any
/// nesting depth are found, not just top-level ones.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceFile {
    /// Read and parse the Go file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let source =
            std::fs::read_to_string(&path).map_err(|source| Error::io(path.clone(), source))?;
        let filename = path.display().to_string();
        Self::parse(path, source, &filename)
    }

    /// Parse Go source held in memory; `filename` only labels diagnostics.
    pub fn from_source(source: impl Into<String>, filename: &str) -> Result<Self> {
        Self::parse(PathBuf::from(filename), source.into(), filename)
    }

    fn parse(path: PathBuf, source: String, filename: &str) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(Error::grammar)?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| Error::parse(filename, &source, None))?;

        // tree-sitter always hands back a tree; syntax errors surface as
        // ERROR or missing nodes inside it.
        if let Some(bad) = first_syntax_error(tree.root_node()) {
            let span = bad.start_byte()..bad.end_byte();
            return Err(Error::parse(filename, &source, Some(span)));
        }

        Ok(Self { path, source, tree })
    }

    /// Path the file was read from (or the diagnostic label for in-memory
    /// sources).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Find the struct type declaration named `name`.
    ///
    /// When several declarations share the name, the last one in document
    /// order wins. Aliases (`type X = ...`) and non-struct types are ignored.
    pub fn find_struct(&self, name: &str) -> Option<StructDecl<'_>> {
        let mut found = None;
        walk(self.tree.root_node(), &mut |node| {
            if self.is_struct_spec_named(node, name) {
                found = Some(node);
            }
        });
        found.map(|node| StructDecl {
            node,
            source: &self.source,
        })
    }

    /// Exported fields of the struct named `name`, in declaration order.
    ///
    /// Fails with [`Error::NoExportedFields`] when the struct is absent or
    /// none of its fields are exported.
    pub fn exported_fields(&self, name: &str) -> Result<Vec<StructField>> {
        let fields = self
            .find_struct(name)
            .map(|decl| decl.exported_fields())
            .unwrap_or_default();
        if fields.is_empty() {
            return Err(Error::no_exported_fields(name));
        }
        Ok(fields)
    }

    fn is_struct_spec_named(&self, node: Node<'_>, name: &str) -> bool {
        node.kind() == "type_spec"
            && node
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(self.source.as_bytes()).ok())
                == Some(name)
            && node
                .child_by_field_name("type")
                .is_some_and(|ty| ty.kind() == "struct_type")
    }
}

/// Visit every node in document order (pre-order, children left to right).
fn walk<'tree, F: FnMut(Node<'tree>)>(node: Node<'tree>, visit: &mut F) {
    visit(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, visit);
    }
}

/// First ERROR or missing node in document order, if any.
fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        // Clean subtree, nothing to descend into.
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(child) {
            return Some(found);
        }
    }
    None
}
