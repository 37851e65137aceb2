//! Struct declarations and their fields.

use tree_sitter::Node;

use crate::types::{TypeRef, node_text};

/// A struct-shaped `type` declaration located inside a
/// [`SourceFile`](crate::SourceFile).
///
/// Borrows the file's tree and text; extract what you need before the file
/// goes away.
pub struct StructDecl<'a> {
    pub(crate) node: Node<'a>,
    pub(crate) source: &'a str,
}

impl StructDecl<'_> {
    /// The declared type name.
    pub fn name(&self) -> String {
        self.node
            .child_by_field_name("name")
            .map(|name| node_text(name, self.source))
            .unwrap_or_default()
    }

    /// All named fields, in declaration order.
    ///
    /// A declaration binding several names to one type (`X, Y int`) yields
    /// one field per name. Embedded fields have no name of their own and
    /// yield nothing.
    pub fn fields(&self) -> Vec<StructField> {
        let mut fields = Vec::new();
        let Some(body) = self.node.child_by_field_name("type") else {
            return fields;
        };
        let Some(list) = first_child_of_kind(body, "field_declaration_list") else {
            return fields;
        };
        let mut entries = list.walk();
        for entry in list.named_children(&mut entries) {
            if entry.kind() != "field_declaration" {
                continue;
            }
            let Some(type_node) = entry.child_by_field_name("type") else {
                continue;
            };
            let ty = TypeRef::from_node(type_node, self.source);
            let mut names = entry.walk();
            for name in entry.children_by_field_name("name", &mut names) {
                fields.push(StructField {
                    name: node_text(name, self.source),
                    ty: ty.clone(),
                });
            }
        }
        fields
    }

    /// The exported subset of [`fields`](Self::fields), order preserved.
    pub fn exported_fields(&self) -> Vec<StructField> {
        self.fields()
            .into_iter()
            .filter(|field| field.is_exported())
            .collect()
    }
}

/// One named struct field with its lowered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// The field name as written in the source.
    pub name: String,
    /// The field type.
    pub ty: TypeRef,
}

impl StructField {
    /// Whether the field is exported under Go's convention: the name starts
    /// with an uppercase letter.
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(|c| c.is_uppercase())
    }
}

fn first_child_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|child| child.kind() == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceFile;

    fn exported_field(name: &str) -> bool {
        StructField {
            name: name.to_string(),
            ty: TypeRef::named("int"),
        }
        .is_exported()
    }

    #[test]
    fn test_is_exported_uses_first_character() {
        assert!(exported_field("Name"));
        assert!(exported_field("ID"));
        assert!(!exported_field("age"));
        assert!(!exported_field("_hidden"));
        assert!(!exported_field(""));
    }

    #[test]
    fn test_is_exported_handles_unicode() {
        assert!(exported_field("Über"));
        assert!(!exported_field("über"));
    }

    #[test]
    fn test_fields_in_declaration_order() {
        let src = r#"
package models

type Person struct {
    Name string
    age  int
    Tags []string
}
"#;
        let file = SourceFile::from_source(src, "person.go").unwrap();
        let decl = file.find_struct("Person").unwrap();
        assert_eq!(decl.name(), "Person");
        let names: Vec<_> = decl.fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, ["Name", "age", "Tags"]);
    }

    #[test]
    fn test_multi_name_declaration_expands() {
        let src = r#"
package models

type Point struct {
    X, Y int
    Label string
}
"#;
        let file = SourceFile::from_source(src, "point.go").unwrap();
        let decl = file.find_struct("Point").unwrap();
        let fields = decl.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name, "X");
        assert_eq!(fields[0].ty, TypeRef::named("int"));
        assert_eq!(fields[1].name, "Y");
        assert_eq!(fields[1].ty, TypeRef::named("int"));
        assert_eq!(fields[2].name, "Label");
    }

    #[test]
    fn test_embedded_fields_are_skipped() {
        let src = r#"
package models

type Employee struct {
    Person
    *Badge
    Salary int
}
"#;
        let file = SourceFile::from_source(src, "employee.go").unwrap();
        let decl = file.find_struct("Employee").unwrap();
        let names: Vec<_> = decl.fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, ["Salary"]);
    }

    #[test]
    fn test_field_types_are_lowered() {
        let src = r#"
package models

type Record struct {
    Name    string
    Friends []*Person
    Created time.Time
    Scores  []float64
    Next    *Record
    Meta    map[string]string
}
"#;
        let file = SourceFile::from_source(src, "record.go").unwrap();
        let decl = file.find_struct("Record").unwrap();
        let fields = decl.fields();
        assert_eq!(fields[0].ty, TypeRef::named("string"));
        assert_eq!(
            fields[1].ty,
            TypeRef::slice(TypeRef::pointer(TypeRef::named("Person")))
        );
        assert_eq!(
            fields[2].ty,
            TypeRef::qualified(TypeRef::named("time"), "Time")
        );
        assert_eq!(fields[3].ty, TypeRef::slice(TypeRef::named("float64")));
        assert_eq!(fields[4].ty, TypeRef::pointer(TypeRef::named("Record")));
        assert_eq!(fields[5].ty, TypeRef::Other("map_type".into()));
    }

    #[test]
    fn test_array_length_is_dropped() {
        let src = r#"
package models

type Packet struct {
    Header [4]byte
}
"#;
        let file = SourceFile::from_source(src, "packet.go").unwrap();
        let decl = file.find_struct("Packet").unwrap();
        let fields = decl.fields();
        assert_eq!(fields[0].ty, TypeRef::slice(TypeRef::named("byte")));
    }

    #[test]
    fn test_exported_fields_filters_but_keeps_order() {
        let src = r#"
package models

type Person struct {
    Name string
    age  int
    Tags []string
}
"#;
        let file = SourceFile::from_source(src, "person.go").unwrap();
        let decl = file.find_struct("Person").unwrap();
        let names: Vec<_> = decl.exported_fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, ["Name", "Tags"]);
    }

    #[test]
    fn test_tagged_fields_keep_their_type() {
        let src = r#"
package models

type User struct {
    Email string `json:"email"`
}
"#;
        let file = SourceFile::from_source(src, "user.go").unwrap();
        let decl = file.find_struct("User").unwrap();
        let fields = decl.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Email");
        assert_eq!(fields[0].ty, TypeRef::named("string"));
    }
}
